//! Configuration structures.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use curveshock_core::ParsePolicy;

use crate::error::{ConfigError, ConfigResult};

/// Treasury daily par yield curve CSV endpoint (year and query are appended).
pub const DEFAULT_TREASURY_URL: &str =
    "https://home.treasury.gov/resource-center/data-chart-center/interest-rates/daily-treasury-rates.csv";

/// Browser-like user agent; the Treasury site rejects bare clients.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Ceiling on a single upstream attempt.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Cache time-to-live.
pub const DEFAULT_TTL_SECS: u64 = 3600;

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,curveshock=debug";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurveshockConfig {
    /// Where curves come from
    #[serde(default)]
    pub source: SourceConfig,

    /// Curve cache settings
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Kind of curve source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Treasury CSV over HTTP
    #[default]
    Treasury,
    /// `{year}.csv` files in a local directory
    Directory,
}

/// Curve source configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Source kind
    #[serde(default)]
    pub kind: SourceKind,

    /// Base URL of the Treasury CSV endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// User-Agent header sent upstream
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-attempt timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Directory holding `{year}.csv` files (directory source only)
    pub directory: Option<PathBuf>,

    /// Treatment of unparsable tenor cells
    #[serde(default)]
    pub parse_policy: ParsePolicy,
}

fn default_base_url() -> String {
    DEFAULT_TREASURY_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::default(),
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            directory: None,
            parse_policy: ParsePolicy::default(),
        }
    }
}

impl SourceConfig {
    /// Per-attempt timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Curve cache configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Time-to-live in seconds
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

fn default_ttl_secs() -> u64 {
    DEFAULT_TTL_SECS
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
        }
    }
}

impl CacheConfig {
    /// Time-to-live.
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl CurveshockConfig {
    /// Load configuration from a TOML file and validate it.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string and validate it.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::Deserialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.cache.ttl_secs == 0 {
            return Err(ConfigError::validation("cache.ttl_secs", "must be positive"));
        }
        if self.source.timeout_secs == 0 {
            return Err(ConfigError::validation(
                "source.timeout_secs",
                "must be positive",
            ));
        }
        match self.source.kind {
            SourceKind::Treasury => {
                if self.source.base_url.trim().is_empty() {
                    return Err(ConfigError::validation(
                        "source.base_url",
                        "must not be empty",
                    ));
                }
            }
            SourceKind::Directory => {
                if self.source.directory.is_none() {
                    return Err(ConfigError::validation(
                        "source.directory",
                        "required when source.kind = \"directory\"",
                    ));
                }
            }
        }
        Ok(())
    }
}
