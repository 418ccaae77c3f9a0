//! In-memory HTTP header collection.
//!
//! [`HttpHeaders`] stores headers under case-insensitive names, validates
//! names and values against the HTTP field grammar, and exposes `entries`,
//! `keys` and `values` views plus the usual `for` loop iteration.
//!
//! ```
//! use rustyheaders::HttpHeaders;
//!
//! let mut headers = HttpHeaders::new();
//! headers.append("Set-Cookie", "a=1")?;
//! headers.append("Set-Cookie", "b=2")?;
//! assert_eq!(headers.get("set-cookie")?, Some("a=1, b=2"));
//!
//! headers.delete("SET-COOKIE")?;
//! assert!(!headers.has("set-cookie")?);
//! # Ok::<(), rustyheaders::ValidationError>(())
//! ```

pub mod config;
pub mod http;

pub use config::{ConfigError, HeadersConfig};
pub use http::{HttpHeaders, ValidationError};
