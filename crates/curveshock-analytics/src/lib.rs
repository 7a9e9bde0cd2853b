//! # curveshock-analytics
//!
//! Scenario shocks and risk metrics for a yield curve.
//!
//! - **Shocks**: parallel shift, steepener/flattener twist around a pivot, custom point shocks
//! - **Metrics**: modified duration and DV01 of a zero-coupon instrument at each tenor
//!
//! ## Example
//!
//! ```rust
//! use curveshock_analytics::prelude::*;
//! use curveshock_core::{Tenor, YieldCurve};
//!
//! let curve = YieldCurve::from_pairs(&[(0.5, 5.0), (2.0, 4.5), (30.0, 4.2)]).unwrap();
//! let spec = ShockSpec::steepener(100.0, DEFAULT_PIVOT_TENOR);
//! spec.validate(&curve).unwrap();
//!
//! let shocked = spec.apply(&curve);
//! assert_eq!(shocked.get(Tenor::years(2)), Some(4.5));
//!
//! let metrics = tenor_metrics(&curve, &shocked);
//! assert_eq!(metrics.len(), 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod metrics;
pub mod shock;
mod error;

pub use error::{AnalyticsError, AnalyticsResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::metrics::*;
    pub use crate::shock::*;
    pub use crate::{AnalyticsError, AnalyticsResult};
}
