use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

/// Headers configured from a TOML file.
///
/// ```toml
/// [defaults]
/// Server = "rustyheaders/0.1"
/// Cache-Control = "no-store"
/// ```
///
/// Names and values are kept as written. They are validated when applied
/// through [`HttpHeaders::from_config`](crate::http::headers::HttpHeaders::from_config).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HeadersConfig {
    pub defaults: IndexMap<String, String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to deserialize config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl HeadersConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str::<HeadersConfig>(content)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content)
    }

    /// Loads `path`, falling back to an empty config when it cannot be read
    /// or parsed.
    pub fn from_file_or_default(path: impl AsRef<Path>) -> Self {
        match Self::from_file(path.as_ref()) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.as_ref().display(), error = %err, "falling back to default headers config");
                HeadersConfig::default()
            }
        }
    }
}
