//! Error types for source operations.

use thiserror::Error;

/// Common error type for curve sources.
#[derive(Debug, Error)]
pub enum TraitError {
    /// Connection to external service failed
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Upstream answered with a non-success status
    #[error("upstream returned HTTP {status}: {url}")]
    HttpStatus {
        /// Status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Requested reference period not found
    #[error("not found: {0}")]
    NotFound(String),

    /// Operation timed out
    #[error("timeout after {0:?}")]
    Timeout(std::time::Duration),

    /// Parse/deserialization error
    #[error("parse error: {0}")]
    ParseError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(String),

    /// Invalid input
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for TraitError {
    fn from(e: std::io::Error) -> Self {
        if e.kind() == std::io::ErrorKind::NotFound {
            TraitError::NotFound(e.to_string())
        } else {
            TraitError::IoError(e.to_string())
        }
    }
}
