//! Yield curve and curve snapshot types.
//!
//! A [`YieldCurve`] is immutable: every transformation returns a new curve.
//! Yields are in percent (`4.5` means 4.5%) and may be negative.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::tenor::Tenor;

/// A single tenor/yield pair, the serialized form of a curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Tenor in years.
    pub tenor: Tenor,
    /// Yield in percent.
    #[serde(rename = "yield")]
    pub yield_pct: f64,
}

/// Ordered mapping from tenor to yield (percent).
///
/// No tenor appears twice. The tenor set is fixed once the curve is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<CurvePoint>", try_from = "Vec<CurvePoint>")]
pub struct YieldCurve {
    points: BTreeMap<Tenor, f64>,
}

impl YieldCurve {
    /// Create an empty curve.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a curve from points, rejecting duplicate tenors and non-finite yields.
    pub fn try_from_points(points: impl IntoIterator<Item = (Tenor, f64)>) -> CoreResult<Self> {
        let mut map = BTreeMap::new();
        for (tenor, yield_pct) in points {
            if !yield_pct.is_finite() {
                return Err(CoreError::InvalidYield {
                    tenor: tenor.as_years(),
                    value: yield_pct,
                });
            }
            if map.insert(tenor, yield_pct).is_some() {
                return Err(CoreError::DuplicateTenor {
                    tenor: tenor.as_years(),
                });
            }
        }
        Ok(Self { points: map })
    }

    /// Build a curve from `(years, yield_pct)` pairs.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> CoreResult<Self> {
        let points = pairs
            .iter()
            .map(|&(years, yield_pct)| Tenor::new(years).map(|t| (t, yield_pct)))
            .collect::<CoreResult<Vec<_>>>()?;
        Self::try_from_points(points)
    }

    /// Yield at an exact tenor, if present.
    pub fn get(&self, tenor: Tenor) -> Option<f64> {
        self.points.get(&tenor).copied()
    }

    /// Whether the curve has a point at this tenor.
    pub fn contains(&self, tenor: Tenor) -> bool {
        self.points.contains_key(&tenor)
    }

    /// Iterate points in ascending tenor order.
    pub fn iter(&self) -> impl Iterator<Item = (Tenor, f64)> + '_ {
        self.points.iter().map(|(t, y)| (*t, *y))
    }

    /// Tenors in ascending order.
    pub fn tenors(&self) -> impl Iterator<Item = Tenor> + '_ {
        self.points.keys().copied()
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the curve has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Shortest tenor.
    pub fn min_tenor(&self) -> Option<Tenor> {
        self.points.keys().next().copied()
    }

    /// Longest tenor.
    pub fn max_tenor(&self) -> Option<Tenor> {
        self.points.keys().next_back().copied()
    }

    /// New curve with the same tenors and yields mapped through `f(tenor, yield)`.
    pub fn map_yields<F>(&self, mut f: F) -> Self
    where
        F: FnMut(Tenor, f64) -> f64,
    {
        Self {
            points: self.points.iter().map(|(t, y)| (*t, f(*t, *y))).collect(),
        }
    }

    /// Points as a vector, ascending.
    pub fn to_points(&self) -> Vec<CurvePoint> {
        self.iter()
            .map(|(tenor, yield_pct)| CurvePoint { tenor, yield_pct })
            .collect()
    }
}

impl From<YieldCurve> for Vec<CurvePoint> {
    fn from(curve: YieldCurve) -> Self {
        curve.to_points()
    }
}

impl TryFrom<Vec<CurvePoint>> for YieldCurve {
    type Error = CoreError;

    fn try_from(points: Vec<CurvePoint>) -> Result<Self, Self::Error> {
        Self::try_from_points(points.into_iter().map(|p| (p.tenor, p.yield_pct)))
    }
}

/// A curve observed for a given date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSnapshot {
    /// Observation date exactly as the upstream wrote it.
    pub as_of: String,
    /// The curve.
    pub curve: YieldCurve,
}

impl CurveSnapshot {
    /// Create a new snapshot.
    pub fn new(as_of: impl Into<String>, curve: YieldCurve) -> Self {
        Self {
            as_of: as_of.into(),
            curve,
        }
    }

    /// Observation date parsed from `MM/DD/YYYY` or `YYYY-MM-DD`.
    pub fn as_of_date(&self) -> Option<NaiveDate> {
        let s = self.as_of.trim();
        NaiveDate::parse_from_str(s, "%m/%d/%Y")
            .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
            .ok()
    }
}
