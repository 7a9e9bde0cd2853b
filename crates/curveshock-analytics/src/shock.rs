//! Deterministic yield curve shocks.
//!
//! Three transforms, each returning a new curve and leaving the input untouched:
//!
//! - [`parallel`]: the same shift at every tenor
//! - [`steepener`]: a twist around a pivot tenor (flattener for negative magnitudes)
//! - [`custom`]: per-tenor shifts for tenors already on the curve
//!
//! Magnitudes are in basis points; curve yields are in percent, so a shock of
//! `m` bps moves a yield by `m / 100`.
//!
//! # Example: Scenario Dispatch
//!
//! ```rust
//! use curveshock_analytics::shock::ShockSpec;
//! use curveshock_core::{Tenor, YieldCurve};
//!
//! let curve = YieldCurve::from_pairs(&[(2.0, 4.5), (10.0, 4.0)]).unwrap();
//! let shocked = ShockSpec::parallel(-50.0).apply(&curve);
//! assert_eq!(shocked.get(Tenor::years(2)), Some(4.0));
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use curveshock_core::{Tenor, YieldCurve};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Pivot tenor used when a steepener request does not name one.
pub const DEFAULT_PIVOT_TENOR: f64 = 2.0;

/// Basis points to percentage points.
fn bps_to_pct(bps: f64) -> f64 {
    bps / 100.0
}

/// Shifts every yield by `magnitude_bps`.
pub fn parallel(curve: &YieldCurve, magnitude_bps: f64) -> YieldCurve {
    let shift = bps_to_pct(magnitude_bps);
    curve.map_yields(|_, y| y + shift)
}

/// Twist weight at `tenor` for a pivot and the curve's longest tenor.
///
/// Linear from -1 at tenor 0 to 0 at the pivot, then from 0 at the pivot to +1
/// at `max_tenor`. Undefined when `pivot == 0` or `pivot == max_tenor`.
pub fn twist_weight(tenor: f64, pivot: f64, max_tenor: f64) -> f64 {
    if tenor <= pivot {
        -(pivot - tenor) / pivot
    } else {
        (tenor - pivot) / (max_tenor - pivot)
    }
}

/// Steepener/flattener twist around `pivot_tenor`.
///
/// The pivot is left exactly as it was. A positive magnitude lowers the short
/// end and raises the long end by up to `magnitude_bps`; a negative one does
/// the opposite. Callers validate the pivot first (see [`ShockSpec::validate`]).
pub fn steepener(curve: &YieldCurve, magnitude_bps: f64, pivot_tenor: f64) -> YieldCurve {
    let Some(max_tenor) = curve.max_tenor() else {
        return YieldCurve::new();
    };
    let shift = bps_to_pct(magnitude_bps);
    let max_tenor = max_tenor.as_years();

    curve.map_yields(|tenor, y| y + twist_weight(tenor.as_years(), pivot_tenor, max_tenor) * shift)
}

/// Applies per-tenor shocks in basis points.
///
/// Only tenors present on both the curve and the map move; map entries for
/// tenors not on the curve are ignored.
pub fn custom(curve: &YieldCurve, shocks: &BTreeMap<Tenor, f64>) -> YieldCurve {
    curve.map_yields(|tenor, y| match shocks.get(&tenor) {
        Some(bps) => y + bps_to_pct(*bps),
        None => y,
    })
}

/// Shock type name, as used by scenario requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShockKind {
    /// Uniform shift.
    Parallel,
    /// Twist around a pivot.
    Steepener,
    /// Per-tenor shifts.
    Custom,
}

impl fmt::Display for ShockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShockKind::Parallel => write!(f, "parallel"),
            ShockKind::Steepener => write!(f, "steepener"),
            ShockKind::Custom => write!(f, "custom"),
        }
    }
}

impl FromStr for ShockKind {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "parallel" => Ok(ShockKind::Parallel),
            "steepener" | "flattener" | "twist" => Ok(ShockKind::Steepener),
            "custom" => Ok(ShockKind::Custom),
            other => Err(AnalyticsError::UnknownShockType(other.to_string())),
        }
    }
}

/// A fully specified shock.
#[derive(Debug, Clone, PartialEq)]
pub enum ShockSpec {
    /// Uniform shift across all tenors.
    Parallel {
        /// Shift in basis points.
        magnitude_bps: f64,
    },

    /// Twist around a pivot tenor.
    Steepener {
        /// Shift at the longest tenor in basis points (negative flattens).
        magnitude_bps: f64,
        /// Tenor left unchanged (years).
        pivot_tenor: f64,
    },

    /// Per-tenor shifts.
    Custom {
        /// Tenor -> shift in basis points.
        shocks: BTreeMap<Tenor, f64>,
    },
}

impl ShockSpec {
    /// Creates a parallel shock.
    #[must_use]
    pub fn parallel(magnitude_bps: f64) -> Self {
        ShockSpec::Parallel { magnitude_bps }
    }

    /// Creates a steepener (positive magnitude) or flattener (negative magnitude).
    #[must_use]
    pub fn steepener(magnitude_bps: f64, pivot_tenor: f64) -> Self {
        ShockSpec::Steepener {
            magnitude_bps,
            pivot_tenor,
        }
    }

    /// Creates a custom point shock.
    #[must_use]
    pub fn custom(shocks: BTreeMap<Tenor, f64>) -> Self {
        ShockSpec::Custom { shocks }
    }

    /// The shock type.
    pub fn kind(&self) -> ShockKind {
        match self {
            ShockSpec::Parallel { .. } => ShockKind::Parallel,
            ShockSpec::Steepener { .. } => ShockKind::Steepener,
            ShockSpec::Custom { .. } => ShockKind::Custom,
        }
    }

    /// Rejects parameters for which the transform is undefined on `curve`.
    ///
    /// A steepener needs a finite pivot above zero and, on a non-empty curve,
    /// strictly below the longest tenor.
    pub fn validate(&self, curve: &YieldCurve) -> AnalyticsResult<()> {
        match self {
            ShockSpec::Parallel { magnitude_bps } => check_finite("magnitude", *magnitude_bps),
            ShockSpec::Steepener {
                magnitude_bps,
                pivot_tenor,
            } => {
                check_finite("magnitude", *magnitude_bps)?;
                check_finite("pivot", *pivot_tenor)?;
                if *pivot_tenor <= 0.0 {
                    return Err(AnalyticsError::InvalidShockParameters(format!(
                        "pivot tenor must be positive, got {pivot_tenor}"
                    )));
                }
                if let Some(max_tenor) = curve.max_tenor() {
                    if *pivot_tenor >= max_tenor.as_years() {
                        return Err(AnalyticsError::InvalidShockParameters(format!(
                            "pivot tenor {pivot_tenor} must be below the longest tenor {}",
                            max_tenor.as_years()
                        )));
                    }
                }
                Ok(())
            }
            ShockSpec::Custom { shocks } => shocks
                .iter()
                .try_for_each(|(tenor, bps)| check_finite(&format!("shock at {tenor}"), *bps)),
        }
    }

    /// Applies the shock, returning a new curve.
    #[must_use]
    pub fn apply(&self, curve: &YieldCurve) -> YieldCurve {
        match self {
            ShockSpec::Parallel { magnitude_bps } => parallel(curve, *magnitude_bps),
            ShockSpec::Steepener {
                magnitude_bps,
                pivot_tenor,
            } => steepener(curve, *magnitude_bps, *pivot_tenor),
            ShockSpec::Custom { shocks } => custom(curve, shocks),
        }
    }

    /// Returns a short description of this shock.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            ShockSpec::Parallel { magnitude_bps } => {
                format!("Parallel {}", signed_bps(*magnitude_bps))
            }
            ShockSpec::Steepener {
                magnitude_bps,
                pivot_tenor,
            } => {
                let name = if *magnitude_bps < 0.0 {
                    "Flattener"
                } else {
                    "Steepener"
                };
                format!("{name} {} pivot {pivot_tenor}Y", signed_bps(*magnitude_bps))
            }
            ShockSpec::Custom { shocks } => {
                if shocks.is_empty() {
                    return "Custom (no points)".to_string();
                }
                let points: Vec<String> = shocks
                    .iter()
                    .map(|(tenor, bps)| format!("{tenor} {}", signed_bps(*bps)))
                    .collect();
                format!("Custom {}", points.join(", "))
            }
        }
    }
}

fn check_finite(what: &str, value: f64) -> AnalyticsResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AnalyticsError::InvalidShockParameters(format!(
            "{what} must be finite, got {value}"
        )))
    }
}

fn signed_bps(bps: f64) -> String {
    format!("{}{}bp", if bps >= 0.0 { "+" } else { "" }, bps)
}
