//! In-memory curve source for tests and manual curves.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use curveshock_core::CurveSnapshot;
use curveshock_traits::{CurveSource, SourceType, TraitError};

/// Holds one snapshot per year and counts requests.
///
/// [`fail_with`](Self::fail_with) makes every request fail until
/// [`recover`](Self::recover) is called.
#[derive(Default)]
pub struct InMemoryCurveSource {
    snapshots: RwLock<BTreeMap<i32, CurveSnapshot>>,
    failure: RwLock<Option<String>>,
    calls: AtomicUsize,
    requested: RwLock<Vec<i32>>,
}

impl InMemoryCurveSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a snapshot for `year`.
    pub fn with_year(self, year: i32, snapshot: CurveSnapshot) -> Self {
        self.insert(year, snapshot);
        self
    }

    /// Sets (or replaces) the snapshot for `year`.
    pub fn insert(&self, year: i32, snapshot: CurveSnapshot) {
        self.snapshots.write().insert(year, snapshot);
    }

    /// Fails every request with a connection error carrying `reason`.
    pub fn fail_with(&self, reason: impl Into<String>) {
        *self.failure.write() = Some(reason.into());
    }

    /// Clears a failure set by [`fail_with`](Self::fail_with).
    pub fn recover(&self) {
        *self.failure.write() = None;
    }

    /// Number of requests served (including failures).
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Years requested, in order.
    pub fn requested_years(&self) -> Vec<i32> {
        self.requested.read().clone()
    }
}

#[async_trait]
impl CurveSource for InMemoryCurveSource {
    fn source_type(&self) -> SourceType {
        SourceType::Manual
    }

    fn name(&self) -> &str {
        "in-memory"
    }

    async fn latest_for_year(&self, year: i32) -> Result<CurveSnapshot, TraitError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.write().push(year);

        if let Some(reason) = self.failure.read().clone() {
            return Err(TraitError::ConnectionFailed(reason));
        }
        self.snapshots
            .read()
            .get(&year)
            .cloned()
            .ok_or_else(|| TraitError::NotFound(format!("no curve for {year}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curveshock_core::YieldCurve;

    #[tokio::test]
    async fn test_serves_and_counts() {
        let snap = CurveSnapshot::new("2025-01-02", YieldCurve::from_pairs(&[(1.0, 4.0)]).unwrap());
        let source = InMemoryCurveSource::new().with_year(2025, snap.clone());

        assert_eq!(source.latest_for_year(2025).await.unwrap(), snap);
        assert!(matches!(
            source.latest_for_year(2024).await,
            Err(TraitError::NotFound(_))
        ));

        source.fail_with("down");
        assert!(matches!(
            source.latest_for_year(2025).await,
            Err(TraitError::ConnectionFailed(r)) if r == "down"
        ));
        source.recover();
        assert!(source.latest_for_year(2025).await.is_ok());

        assert_eq!(source.calls(), 4);
        assert_eq!(source.requested_years(), vec![2025, 2024, 2025, 2025]);
    }
}
