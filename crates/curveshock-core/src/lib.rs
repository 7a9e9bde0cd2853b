//! # Curveshock Core
//!
//! Core types shared by every curveshock crate.
//!
//! - [`Tenor`]: time to maturity in years, totally ordered so it can key a curve
//! - [`YieldCurve`]: immutable ordered mapping tenor -> yield (percent)
//! - [`CurveSnapshot`]: a curve together with the observation date it was published for
//! - [`ParsePolicy`]: how upstream cells that fail to parse are treated
//!
//! ## Example
//!
//! ```rust
//! use curveshock_core::{Tenor, YieldCurve};
//!
//! let curve = YieldCurve::from_pairs(&[(0.5, 5.0), (2.0, 4.5), (10.0, 4.0)]).unwrap();
//! assert_eq!(curve.get(Tenor::years(2)), Some(4.5));
//! assert_eq!(curve.max_tenor(), Some(Tenor::years(10)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod curve;
pub mod error;
pub mod policy;
pub mod tenor;

pub use curve::{CurvePoint, CurveSnapshot, YieldCurve};
pub use error::{CoreError, CoreResult};
pub use policy::ParsePolicy;
pub use tenor::Tenor;
