//! Error types for shock and metric calculations.

use thiserror::Error;

/// Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors that can occur while preparing a shock.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyticsError {
    /// Shock parameters would make the transform undefined.
    #[error("invalid shock parameters: {0}")]
    InvalidShockParameters(String),

    /// Unknown shock type name.
    #[error("unknown shock type: {0}")]
    UnknownShockType(String),
}
