//! Duration and DV01 for zero-coupon instruments.
//!
//! Each curve point is treated as a zero-coupon bond with 100 face maturing at
//! the tenor, discounted at the point's yield with annual compounding.
//!
//! ## Formulas
//!
//! ```text
//! P      = 100 / (1 + y)^t
//! D_mod  = t / (1 + y)
//! DV01   = P × D_mod × 0.0001
//! ```
//!
//! where `y` is the yield as a decimal and `t` the tenor in years. A zero tenor
//! is a degenerate instrument with no rate sensitivity: duration and DV01 are 0.
//!
//! Yields below -100% make `1 + y` negative and flip the sign of the result;
//! guarding against that is the caller's responsibility.

use serde::{Deserialize, Serialize};

use curveshock_core::{Tenor, YieldCurve};

/// One basis point as a decimal.
pub const ONE_BASIS_POINT: f64 = 0.0001;

/// Face value the price and DV01 are quoted against.
pub const FACE_VALUE: f64 = 100.0;

/// Modified duration in years.
///
/// # Arguments
///
/// * `yield_pct` - Yield in percent (5.0 for 5%)
/// * `tenor_years` - Time to maturity in years
pub fn duration(yield_pct: f64, tenor_years: f64) -> f64 {
    if tenor_years == 0.0 {
        return 0.0;
    }
    tenor_years / (1.0 + yield_pct / 100.0)
}

/// Price of a zero-coupon bond with [`FACE_VALUE`] face.
pub fn zero_coupon_price(yield_pct: f64, tenor_years: f64) -> f64 {
    FACE_VALUE / (1.0 + yield_pct / 100.0).powf(tenor_years)
}

/// Dollar value of one basis point per [`FACE_VALUE`] face.
pub fn dv01(yield_pct: f64, tenor_years: f64) -> f64 {
    if tenor_years == 0.0 {
        return 0.0;
    }
    zero_coupon_price(yield_pct, tenor_years) * duration(yield_pct, tenor_years) * ONE_BASIS_POINT
}

/// Risk metrics for one tenor of a shocked curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TenorMetric {
    /// Tenor in years.
    pub tenor: Tenor,
    /// Shocked yield in percent.
    #[serde(rename = "yield")]
    pub yield_pct: f64,
    /// Shocked minus original yield, in basis points.
    pub delta_bps: f64,
    /// Modified duration at the shocked yield.
    pub duration: f64,
    /// DV01 at the shocked yield.
    pub dv01: f64,
}

/// Metrics for every tenor of `original`, evaluated at the `shocked` yields.
///
/// A tenor missing from `shocked` is evaluated at its original yield.
pub fn tenor_metrics(original: &YieldCurve, shocked: &YieldCurve) -> Vec<TenorMetric> {
    original
        .iter()
        .map(|(tenor, original_yield)| {
            let yield_pct = shocked.get(tenor).unwrap_or(original_yield);
            let years = tenor.as_years();
            TenorMetric {
                tenor,
                yield_pct,
                delta_bps: (yield_pct - original_yield) * 100.0,
                duration: duration(yield_pct, years),
                dv01: dv01(yield_pct, years),
            }
        })
        .collect()
}
