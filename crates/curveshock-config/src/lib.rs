//! # Curveshock Config
//!
//! Configuration for the curveshock engine and CLI, loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file) is a valid
//! configuration that talks to the Treasury endpoint with a one hour cache.
//!
//! ```toml
//! [source]
//! kind = "directory"
//! directory = "./data"
//! parse_policy = "strict"
//!
//! [cache]
//! ttl_secs = 600
//!
//! [logging]
//! filter = "info,curveshock=debug"
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod settings;

pub use error::{ConfigError, ConfigResult};
pub use settings::{
    CacheConfig, CurveshockConfig, LoggingConfig, SourceConfig, SourceKind, DEFAULT_LOG_FILTER,
    DEFAULT_TIMEOUT_SECS, DEFAULT_TREASURY_URL, DEFAULT_TTL_SECS, DEFAULT_USER_AGENT,
};
