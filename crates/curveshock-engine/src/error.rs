//! Engine error types.

use thiserror::Error;

use curveshock_analytics::AnalyticsError;
use curveshock_config::ConfigError;

/// Engine operation result type.
pub type EngineResult<T> = Result<T, EngineError>;

/// Engine error type.
#[derive(Debug, Error)]
pub enum EngineError {
    /// No fresh or stale curve could be obtained
    #[error("data unavailable: {0}")]
    DataUnavailable(String),

    /// Shock parameters rejected before the shock ran
    #[error("invalid shock parameters: {0}")]
    InvalidShockParameters(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl EngineError {
    /// True for failures a service would report as "unavailable".
    pub fn is_unavailable(&self) -> bool {
        matches!(self, EngineError::DataUnavailable(_))
    }
}

impl From<AnalyticsError> for EngineError {
    fn from(err: AnalyticsError) -> Self {
        match err {
            AnalyticsError::InvalidShockParameters(msg) => EngineError::InvalidShockParameters(msg),
            AnalyticsError::UnknownShockType(kind) => {
                EngineError::InvalidShockParameters(format!("unknown shock type: {kind}"))
            }
        }
    }
}

impl From<ConfigError> for EngineError {
    fn from(err: ConfigError) -> Self {
        EngineError::ConfigError(err.to_string())
    }
}
