//! # Curveshock Engine
//!
//! The request-driven side of curveshock.
//!
//! This crate provides:
//! - [`CurveCache`]: single-slot TTL cache that keeps expired entries for fallback
//! - [`CurveProvider`]: cache-fronted fetch with current-year then prior-year fallback
//! - [`ScenarioAnalyzer`]: fetch, validate, shock and measure in one call
//!
//! ## Architecture
//!
//! ```text
//! CurveSource ─> CurveProvider ─┬─> CurveCache
//!                               │
//!                               └─> ScenarioAnalyzer ─> ShockSpec ─> TenorMetrics
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let provider = CurveProviderBuilder::new()
//!     .with_config(&config)
//!     .with_source(create_curve_source(&config.source)?)
//!     .build()?;
//!
//! let analyzer = ScenarioAnalyzer::new(Arc::new(provider));
//! let report = analyzer.analyze(&ScenarioRequest::parallel(100.0)).await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod builder;
pub mod cache;
pub mod clock;
pub mod error;
pub mod provider;

pub use analysis::{ScenarioAnalyzer, ScenarioReport, ScenarioRequest};
pub use builder::CurveProviderBuilder;
pub use cache::{CacheRead, CurveCache};
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{EngineError, EngineResult};
pub use provider::CurveProvider;
