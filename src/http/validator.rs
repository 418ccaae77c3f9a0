//! Header field grammar checks and normalization.
//!
//! Every name and value that enters [`HttpHeaders`](crate::http::headers::HttpHeaders)
//! goes through [`normalize_name`] or [`normalize_value`]. Validation always
//! runs on the original input; trimming and case folding only happen once the
//! input is known to be valid.

use thiserror::Error;

/// Errors returned when a header name or value breaks the field grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The name is empty or holds a character outside the token set.
    #[error("Invalid character in header field name: {name:?}")]
    InvalidHeaderName { name: String },

    /// The value holds a control or non-latin-1 character.
    #[error("Invalid character in header field value: {value:?}")]
    InvalidHeaderValue { value: String },
}

impl ValidationError {
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::InvalidHeaderName { .. } => "InvalidHeaderName",
            ValidationError::InvalidHeaderValue { .. } => "InvalidHeaderValue",
        }
    }
}

/// Token characters allowed in a header field name: ASCII letters and
/// digits plus ``!#$%&'*+.^_`|~-``.
pub fn is_valid_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '!' | '#' | '$' | '%' | '&' | '\'' | '*' | '+' | '.' | '^' | '_' | '`' | '|' | '~' | '-'
        )
}

/// Characters allowed in a header field value: VT, printable ASCII and the
/// upper half of latin-1.
pub fn is_valid_value_char(c: char) -> bool {
    matches!(c, '\u{0b}' | '\u{20}'..='\u{7e}' | '\u{80}'..='\u{ff}')
}

// Only whitespace that survives value validation needs trimming.
fn is_trimmable(c: char) -> bool {
    matches!(c, ' ' | '\u{0b}' | '\u{a0}')
}

/// Validates `name` and returns its lookup key (trimmed, lowercase).
pub fn normalize_name(name: &str) -> Result<String, ValidationError> {
    if name.is_empty() || !name.chars().all(is_valid_name_char) {
        tracing::debug!(header = %name, "rejected header name");
        return Err(ValidationError::InvalidHeaderName {
            name: name.to_string(),
        });
    }

    Ok(name.trim().to_ascii_lowercase())
}

/// Validates `value` and returns it with surrounding whitespace removed.
pub fn normalize_value(value: &str) -> Result<String, ValidationError> {
    if !value.chars().all(is_valid_value_char) {
        tracing::debug!(value = %value, "rejected header value");
        return Err(ValidationError::InvalidHeaderValue {
            value: value.to_string(),
        });
    }

    Ok(value.trim_matches(is_trimmable).to_string())
}
