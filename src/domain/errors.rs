// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! This module defines the error types that can occur when decoding a configuration
//! document or reading values out of it. All errors use `thiserror` for proper error
//! handling and conversion.
//!
//! A key that is simply absent is not an error: lookups report it as `None` and the
//! typed accessors fall back to the type's zero value.

use thiserror::Error;

/// The main error type for configuration operations.
///
/// It is marked as `#[non_exhaustive]` to allow for future additions without
/// breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use dotcfg::domain::errors::ConfigError;
///
/// fn read_port() -> Result<i64, ConfigError> {
///     Err(ConfigError::TypeMismatch {
///         key: "database.port".to_string(),
///         expected: "integer",
///         found: "string",
///     })
/// }
///
/// assert!(read_port().is_err());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configuration document is not well-formed.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The file extension does not belong to any supported format.
    #[error("Unsupported file type: {extension}")]
    UnsupportedFileType {
        /// The rejected extension, including its leading dot (empty when missing)
        extension: String,
    },

    /// A key ends with a dangling escape character.
    #[error("Invalid terminal escape in key '{key}'")]
    InvalidEscape {
        /// The offending key
        key: String,
    },

    /// A typed accessor found a value of a different kind.
    #[error("Type mismatch for key '{key}': expected {expected}, found {found}")]
    TypeMismatch {
        /// The key being read
        key: String,
        /// The kind the accessor asked for
        expected: &'static str,
        /// The kind actually stored
        found: &'static str,
    },

    /// A builder option was rejected.
    #[error("Invalid option: {message}")]
    InvalidOption {
        /// The error message
        message: String,
    },

    /// A configuration file could not be loaded.
    #[error("Failed to load '{path}': {message}")]
    LoadError {
        /// The file that failed to load
        path: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ConfigError {
    /// Creates a `TypeMismatch` error for `key`.
    pub fn type_mismatch(key: &str, expected: &'static str, found: &'static str) -> Self {
        ConfigError::TypeMismatch {
            key: key.to_string(),
            expected,
            found,
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
