//! Tenor representation.
//!
//! A tenor is a time to maturity in years. Upstream feeds label their columns
//! `"1 Mo"`, `"10 Yr"` and so on; month labels map to exactly `n / 12` years so
//! that a tenor parsed from `"1M"` compares equal to the one built for the
//! `"1 Mo"` column.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Time to maturity in years.
///
/// Always finite and non-negative, so the total order below agrees with the
/// usual numeric order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub struct Tenor(f64);

impl Tenor {
    /// Create a tenor from a number of years.
    pub fn new(years: f64) -> CoreResult<Self> {
        if !years.is_finite() {
            return Err(CoreError::InvalidTenor {
                value: years,
                reason: "must be finite".to_string(),
            });
        }
        if years < 0.0 {
            return Err(CoreError::InvalidTenor {
                value: years,
                reason: "must not be negative".to_string(),
            });
        }
        // normalizes -0.0
        Ok(Self(years + 0.0))
    }

    /// Tenor of `n` months, exactly `n / 12` years.
    pub fn months(n: u32) -> Self {
        Self(f64::from(n) / 12.0)
    }

    /// Tenor of `n` whole years.
    pub fn years(n: u32) -> Self {
        Self(f64::from(n))
    }

    /// The tenor in years.
    pub fn as_years(self) -> f64 {
        self.0
    }

    /// Parse a tenor from decimal years (`"0.5"`) or a label (`"3M"`, `"6 Mo"`, `"10Y"`, `"30 Yr"`).
    pub fn parse(s: &str) -> CoreResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CoreError::ParseTenor(s.to_string()));
        }

        if let Ok(years) = trimmed.parse::<f64>() {
            return Self::new(years);
        }

        let compact: String = trimmed
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();

        let split = compact
            .find(|c: char| c.is_ascii_alphabetic())
            .ok_or_else(|| CoreError::ParseTenor(s.to_string()))?;
        let (num_str, unit) = compact.split_at(split);
        let num: u32 = num_str
            .parse()
            .map_err(|_| CoreError::ParseTenor(s.to_string()))?;

        match unit {
            "M" | "MO" | "MOS" => Ok(Self::months(num)),
            "Y" | "YR" | "YRS" => Ok(Self::years(num)),
            _ => Err(CoreError::ParseTenor(s.to_string())),
        }
    }

    /// Short label: `1M`, `6M`, `2Y`, or decimal years when neither fits.
    pub fn label(&self) -> String {
        let months = self.0 * 12.0;
        if self.0 < 1.0 && (months - months.round()).abs() < 1e-9 {
            format!("{}M", months.round() as u32)
        } else if self.0.fract() == 0.0 {
            format!("{}Y", self.0 as u32)
        } else {
            format!("{}Y", self.0)
        }
    }
}

impl PartialEq for Tenor {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Tenor {}

impl PartialOrd for Tenor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tenor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for Tenor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Tenor {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<f64> for Tenor {
    type Error = CoreError;

    fn try_from(years: f64) -> Result<Self, Self::Error> {
        Self::new(years)
    }
}

impl From<Tenor> for f64 {
    fn from(tenor: Tenor) -> Self {
        tenor.0
    }
}
