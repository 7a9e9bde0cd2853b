//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration operation result type.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("cannot read configuration {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Deserialization error.
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// Validation error.
    #[error("validation error on '{field}': {message}")]
    Validation {
        /// Field that failed validation.
        field: String,
        /// Validation error message.
        message: String,
    },
}

impl ConfigError {
    /// Creates a validation error.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}
