//! Error types for core curve types.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while constructing tenors and curves.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Tenor is negative, NaN or infinite.
    #[error("invalid tenor {value}: {reason}")]
    InvalidTenor {
        /// The rejected value in years.
        value: f64,
        /// Why it was rejected.
        reason: String,
    },

    /// Tenor label could not be understood.
    #[error("cannot parse tenor '{0}'")]
    ParseTenor(String),

    /// The same tenor appeared twice while building a curve.
    #[error("duplicate tenor {tenor} in curve")]
    DuplicateTenor {
        /// The repeated tenor in years.
        tenor: f64,
    },

    /// Yield is NaN or infinite.
    #[error("invalid yield {value} at tenor {tenor}")]
    InvalidYield {
        /// Tenor in years.
        tenor: f64,
        /// The rejected yield.
        value: f64,
    },
}
