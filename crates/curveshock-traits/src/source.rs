//! Yield curve source traits.
//!
//! A source publishes one document per reference year (the calendar year of
//! the observations it holds) and turns it into the newest [`CurveSnapshot`]
//! in that document. Transport and format are the source's business; the
//! provider only sees a snapshot or an error.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use curveshock_core::CurveSnapshot;

use crate::error::TraitError;

/// Source type for curve data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceType {
    /// Snapshot/request-response (REST APIs)
    Snapshot,
    /// File-based (CSV)
    File,
    /// Manual entry / in-memory
    Manual,
}

/// Trait for yield curve providers.
#[async_trait]
pub trait CurveSource: Send + Sync {
    /// Source type.
    fn source_type(&self) -> SourceType;

    /// Human-readable name used in logs.
    fn name(&self) -> &str;

    /// Latest curve published in the document for `year`.
    ///
    /// Any failure (transport, status, parse) is returned as an error; the
    /// caller decides whether to fall back to another year.
    async fn latest_for_year(&self, year: i32) -> Result<CurveSnapshot, TraitError>;
}
