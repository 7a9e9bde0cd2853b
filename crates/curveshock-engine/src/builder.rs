//! Builder for the curve provider.

use std::sync::Arc;
use std::time::Duration;

use curveshock_config::{CurveshockConfig, DEFAULT_TIMEOUT_SECS};
use curveshock_traits::CurveSource;

use crate::cache::CurveCache;
use crate::clock::{Clock, SystemClock};
use crate::error::EngineError;
use crate::provider::CurveProvider;

/// Builder for constructing a [`CurveProvider`].
pub struct CurveProviderBuilder {
    source: Option<Arc<dyn CurveSource>>,
    cache: Option<Arc<CurveCache>>,
    clock: Option<Arc<dyn Clock>>,
    ttl: Duration,
    attempt_timeout: Duration,
}

impl CurveProviderBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            source: None,
            cache: None,
            clock: None,
            ttl: CurveCache::default().ttl(),
            attempt_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Apply TTL and timeout from configuration.
    pub fn with_config(mut self, config: &CurveshockConfig) -> Self {
        self.ttl = config.cache.ttl();
        self.attempt_timeout = config.source.timeout();
        self
    }

    /// Set the curve source.
    pub fn with_source(mut self, source: Arc<dyn CurveSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Share an existing cache instead of creating one. Its TTL wins.
    pub fn with_cache(mut self, cache: Arc<CurveCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Set the clock (defaults to the system clock).
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Set the per-attempt timeout.
    pub fn with_attempt_timeout(mut self, timeout: Duration) -> Self {
        self.attempt_timeout = timeout;
        self
    }

    /// Build the provider.
    pub fn build(self) -> Result<CurveProvider, EngineError> {
        let source = self
            .source
            .ok_or_else(|| EngineError::ConfigError("curve source not set".into()))?;

        if self.attempt_timeout.is_zero() {
            return Err(EngineError::ConfigError(
                "attempt timeout must be positive".into(),
            ));
        }

        let cache = self
            .cache
            .unwrap_or_else(|| Arc::new(CurveCache::new(self.ttl)));
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));

        Ok(CurveProvider::new(
            source,
            cache,
            clock,
            self.attempt_timeout,
        ))
    }
}

impl Default for CurveProviderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
