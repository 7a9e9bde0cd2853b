//! Single-slot curve cache with TTL.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;

use curveshock_core::CurveSnapshot;

/// Outcome of a cache read.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheRead {
    /// Entry younger than the TTL.
    Fresh(Arc<CurveSnapshot>),
    /// Entry past the TTL; still served when upstream is down.
    Stale(Arc<CurveSnapshot>),
    /// Nothing cached yet.
    Empty,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    fetched_at: i64,
    snapshot: Arc<CurveSnapshot>,
}

/// The most recently fetched curve and when it was fetched.
///
/// Entries are replaced whole under the write lock, so a reader sees either
/// the previous entry or the new one. Expired entries are kept.
#[derive(Debug)]
pub struct CurveCache {
    slot: RwLock<Option<CacheEntry>>,
    ttl: Duration,
}

impl CurveCache {
    /// Create an empty cache.
    pub fn new(ttl: Duration) -> Self {
        Self {
            slot: RwLock::new(None),
            ttl,
        }
    }

    /// Time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Read the entry as of `now` (epoch seconds).
    pub fn read(&self, now: i64) -> CacheRead {
        let ttl = i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX);
        match self.slot.read().as_ref() {
            Some(entry) if now.saturating_sub(entry.fetched_at) < ttl => {
                CacheRead::Fresh(Arc::clone(&entry.snapshot))
            }
            Some(entry) => CacheRead::Stale(Arc::clone(&entry.snapshot)),
            None => CacheRead::Empty,
        }
    }

    /// Replace the entry.
    pub fn write(&self, snapshot: Arc<CurveSnapshot>, now: i64) {
        *self.slot.write() = Some(CacheEntry {
            fetched_at: now,
            snapshot,
        });
    }

    /// When the current entry was written, if any.
    pub fn last_fetched_at(&self) -> Option<i64> {
        self.slot.read().as_ref().map(|e| e.fetched_at)
    }

    /// Drop the entry.
    pub fn clear(&self) {
        *self.slot.write() = None;
    }
}

impl Default for CurveCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(3600)) // 1 hour
    }
}
