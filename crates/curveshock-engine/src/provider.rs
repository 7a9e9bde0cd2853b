//! Cache-fronted curve provider with year fallback.

use std::sync::Arc;
use std::time::Duration;

use chrono::Datelike;
use tracing::{debug, info, warn};

use curveshock_core::CurveSnapshot;
use curveshock_traits::{CurveSource, TraitError};

use crate::cache::{CacheRead, CurveCache};
use crate::clock::Clock;
use crate::error::{EngineError, EngineResult};

/// Serves the latest curve, refreshing from its source when the cache expires.
///
/// A refresh tries the current calendar year, then the previous one (early
/// January documents are often empty). When both fail the expired entry is
/// served; with nothing cached the call fails with
/// [`EngineError::DataUnavailable`].
///
/// Concurrent callers that all see an expired entry each go upstream; the
/// refreshes are idempotent and the last write wins.
pub struct CurveProvider {
    source: Arc<dyn CurveSource>,
    cache: Arc<CurveCache>,
    clock: Arc<dyn Clock>,
    attempt_timeout: Duration,
}

impl CurveProvider {
    pub(crate) fn new(
        source: Arc<dyn CurveSource>,
        cache: Arc<CurveCache>,
        clock: Arc<dyn Clock>,
        attempt_timeout: Duration,
    ) -> Self {
        Self {
            source,
            cache,
            clock,
            attempt_timeout,
        }
    }

    /// The cache this provider writes to.
    pub fn cache(&self) -> &Arc<CurveCache> {
        &self.cache
    }

    /// Ceiling on one upstream attempt.
    pub fn attempt_timeout(&self) -> Duration {
        self.attempt_timeout
    }

    /// Latest curve snapshot.
    pub async fn fetch(&self) -> EngineResult<Arc<CurveSnapshot>> {
        let now = self.clock.now();
        if let CacheRead::Fresh(snapshot) = self.cache.read(now.timestamp()) {
            debug!(as_of = %snapshot.as_of, "curve cache hit");
            return Ok(snapshot);
        }

        let year = now.year();
        let mut last_error: Option<TraitError> = None;
        for period in [year, year - 1] {
            match self.attempt(period).await {
                Ok(snapshot) => {
                    if snapshot.curve.is_empty() {
                        warn!(year = period, as_of = %snapshot.as_of, "source returned a curve with no tenors");
                    }
                    info!(
                        source = self.source.name(),
                        year = period,
                        as_of = %snapshot.as_of,
                        tenors = snapshot.curve.len(),
                        "curve refreshed"
                    );
                    let snapshot = Arc::new(snapshot);
                    self.cache
                        .write(Arc::clone(&snapshot), self.clock.now().timestamp());
                    return Ok(snapshot);
                }
                Err(e) => {
                    warn!(source = self.source.name(), year = period, error = %e, "curve fetch attempt failed");
                    last_error = Some(e);
                }
            }
        }

        let reason = last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "no reference period attempted".to_string());

        // Re-read: a concurrent refresh may have landed while the attempts ran.
        match self.cache.read(self.clock.now().timestamp()) {
            CacheRead::Fresh(snapshot) | CacheRead::Stale(snapshot) => {
                warn!(as_of = %snapshot.as_of, %reason, "serving cached curve after failed refresh");
                Ok(snapshot)
            }
            CacheRead::Empty => Err(EngineError::DataUnavailable(format!(
                "unable to fetch Treasury data: {reason}. No cached data available."
            ))),
        }
    }

    async fn attempt(&self, year: i32) -> Result<CurveSnapshot, TraitError> {
        match tokio::time::timeout(self.attempt_timeout, self.source.latest_for_year(year)).await {
            Ok(result) => result,
            Err(_) => Err(TraitError::Timeout(self.attempt_timeout)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    use curveshock_core::{Tenor, YieldCurve};
    use curveshock_ext_treasury::InMemoryCurveSource;
    use curveshock_traits::SourceType;

    use crate::builder::CurveProviderBuilder;
    use crate::clock::ManualClock;

    fn snapshot(as_of: &str, ten_year: f64) -> CurveSnapshot {
        CurveSnapshot::new(
            as_of,
            YieldCurve::from_pairs(&[(2.0, 4.5), (10.0, ten_year)]).unwrap(),
        )
    }

    fn june_2025() -> Arc<ManualClock> {
        Arc::new(ManualClock::at(
            Utc.with_ymd_and_hms(2025, 6, 2, 14, 0, 0).unwrap(),
        ))
    }

    fn provider(source: Arc<InMemoryCurveSource>, clock: Arc<ManualClock>) -> CurveProvider {
        CurveProviderBuilder::new()
            .with_source(source)
            .with_clock(clock)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_fresh_cache_skips_source() {
        let source = Arc::new(InMemoryCurveSource::new().with_year(2025, snapshot("06/02/2025", 4.0)));
        let clock = june_2025();
        let provider = provider(Arc::clone(&source), Arc::clone(&clock));

        let first = provider.fetch().await.unwrap();
        clock.advance(3599);
        let second = provider.fetch().await.unwrap();

        assert_eq!(source.calls(), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_expired_cache_refreshes() {
        let source = Arc::new(InMemoryCurveSource::new().with_year(2025, snapshot("06/02/2025", 4.0)));
        let clock = june_2025();
        let provider = provider(Arc::clone(&source), Arc::clone(&clock));

        provider.fetch().await.unwrap();
        source.insert(2025, snapshot("06/03/2025", 4.1));
        clock.advance(3600);

        let refreshed = provider.fetch().await.unwrap();
        assert_eq!(refreshed.as_of, "06/03/2025");
        assert_eq!(source.calls(), 2);
        assert_eq!(
            provider.cache().last_fetched_at(),
            Some(clock.now().timestamp())
        );
    }

    #[tokio::test]
    async fn test_stale_snapshot_served_when_source_fails() {
        let source = Arc::new(InMemoryCurveSource::new().with_year(2025, snapshot("06/02/2025", 4.0)));
        let clock = june_2025();
        let provider = provider(Arc::clone(&source), Arc::clone(&clock));

        let cached = provider.fetch().await.unwrap();
        let fetched_at = provider.cache().last_fetched_at();

        clock.advance(7200);
        source.fail_with("connection reset");
        let served = provider.fetch().await.unwrap();

        assert!(Arc::ptr_eq(&cached, &served));
        assert_eq!(source.requested_years(), vec![2025, 2025, 2024]);
        assert_eq!(provider.cache().last_fetched_at(), fetched_at);
    }

    #[tokio::test]
    async fn test_no_cache_and_no_source_is_unavailable() {
        let source = Arc::new(InMemoryCurveSource::new());
        source.fail_with("dns failure");
        let provider = provider(Arc::clone(&source), june_2025());

        let err = provider.fetch().await.unwrap_err();
        assert!(err.is_unavailable());
        let msg = err.to_string();
        assert!(msg.contains("dns failure"), "{msg}");
        assert!(msg.contains("No cached data available"), "{msg}");
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_prior_year_fallback_is_cached() {
        let source = Arc::new(InMemoryCurveSource::new().with_year(2024, snapshot("12/31/2024", 4.57)));
        let clock = june_2025();
        let provider = provider(Arc::clone(&source), clock);

        let snap = provider.fetch().await.unwrap();
        assert_eq!(snap.as_of, "12/31/2024");
        assert_eq!(snap.curve.get(Tenor::years(10)), Some(4.57));
        assert_eq!(source.requested_years(), vec![2025, 2024]);

        provider.fetch().await.unwrap();
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_year_is_taken_from_clock() {
        let source = Arc::new(InMemoryCurveSource::new());
        let clock = Arc::new(ManualClock::at(
            Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 5).unwrap(),
        ));
        let provider = provider(Arc::clone(&source), clock);

        assert!(provider.fetch().await.is_err());
        assert_eq!(source.requested_years(), vec![2026, 2025]);
    }

    /// Fails every request, but first lands a newer curve in the shared cache
    /// the way a concurrent refresh would.
    struct RacedSource {
        cache: Arc<crate::cache::CurveCache>,
        clock: Arc<ManualClock>,
    }

    #[async_trait]
    impl CurveSource for RacedSource {
        fn source_type(&self) -> SourceType {
            SourceType::Manual
        }

        fn name(&self) -> &str {
            "raced"
        }

        async fn latest_for_year(&self, _year: i32) -> Result<CurveSnapshot, TraitError> {
            self.cache.write(
                Arc::new(snapshot("06/03/2025", 4.2)),
                self.clock.now().timestamp(),
            );
            Err(TraitError::ConnectionFailed("reset by peer".to_string()))
        }
    }

    #[tokio::test]
    async fn test_failed_refresh_serves_latest_cached_entry() {
        let clock = june_2025();
        let cache = Arc::new(crate::cache::CurveCache::default());
        cache.write(
            Arc::new(snapshot("06/01/2025", 4.0)),
            clock.now().timestamp() - 7200,
        );

        let provider = CurveProviderBuilder::new()
            .with_source(Arc::new(RacedSource {
                cache: Arc::clone(&cache),
                clock: Arc::clone(&clock),
            }))
            .with_cache(Arc::clone(&cache))
            .with_clock(clock)
            .build()
            .unwrap();

        let served = provider.fetch().await.unwrap();
        assert_eq!(served.as_of, "06/03/2025");
    }

    struct HangingSource;

    #[async_trait]
    impl CurveSource for HangingSource {
        fn source_type(&self) -> SourceType {
            SourceType::Snapshot
        }

        fn name(&self) -> &str {
            "hanging"
        }

        async fn latest_for_year(&self, _year: i32) -> Result<CurveSnapshot, TraitError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Err(TraitError::ConnectionFailed("unreachable".to_string()))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_attempt_timeout_counts_as_failure() {
        let provider = CurveProviderBuilder::new()
            .with_source(Arc::new(HangingSource))
            .with_clock(june_2025())
            .with_attempt_timeout(Duration::from_secs(30))
            .build()
            .unwrap();

        let started = tokio::time::Instant::now();
        let err = provider.fetch().await.unwrap_err();
        assert!(err.is_unavailable());
        assert!(err.to_string().contains("timeout"), "{err}");
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_secs(60) && elapsed < Duration::from_secs(61));
    }
}
