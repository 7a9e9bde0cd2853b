//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Malformed `--point` value.
    #[error("invalid point '{0}': use TENOR=BPS, e.g. 10Y=25 or 0.5=-10")]
    InvalidPoint(String),

    /// Option that does not apply to the chosen shock.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
