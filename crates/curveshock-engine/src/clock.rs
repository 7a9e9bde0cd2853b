//! Wall-clock abstraction so cache expiry and year selection are testable.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

/// Source of the current UTC time.
pub trait Clock: Send + Sync {
    /// Current time.
    fn now(&self) -> DateTime<Utc>;
}

/// The system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to, with one second resolution.
#[derive(Debug, Default)]
pub struct ManualClock {
    epoch_secs: AtomicI64,
}

impl ManualClock {
    /// Creates a clock stopped at `time`.
    pub fn at(time: DateTime<Utc>) -> Self {
        Self {
            epoch_secs: AtomicI64::new(time.timestamp()),
        }
    }

    /// Moves the clock to `time`.
    pub fn set(&self, time: DateTime<Utc>) {
        self.epoch_secs.store(time.timestamp(), Ordering::SeqCst);
    }

    /// Moves the clock forward by `secs` seconds.
    pub fn advance(&self, secs: i64) {
        self.epoch_secs.fetch_add(secs, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.epoch_secs.load(Ordering::SeqCst), 0).unwrap_or_default()
    }
}
