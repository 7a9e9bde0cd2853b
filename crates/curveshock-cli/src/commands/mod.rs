//! CLI command implementations.

pub mod analyze;
pub mod curve;

pub use analyze::AnalyzeArgs;
pub use curve::CurveArgs;

use curveshock_core::Tenor;

use crate::error::{CliError, CliResult};

/// Parses a `TENOR=BPS` custom shock point.
pub fn parse_point(s: &str) -> CliResult<(Tenor, f64)> {
    let (tenor, bps) = s
        .split_once('=')
        .ok_or_else(|| CliError::InvalidPoint(s.to_string()))?;
    let tenor = Tenor::parse(tenor).map_err(|_| CliError::InvalidPoint(s.to_string()))?;
    let bps: f64 = bps
        .trim()
        .parse()
        .map_err(|_| CliError::InvalidPoint(s.to_string()))?;
    if !bps.is_finite() {
        return Err(CliError::InvalidPoint(s.to_string()));
    }
    Ok((tenor, bps))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("10Y=25").unwrap(), (Tenor::years(10), 25.0));
        assert_eq!(parse_point("1M=-5.5").unwrap(), (Tenor::months(1), -5.5));
        assert_eq!(parse_point("0.5 = 10").unwrap(), (Tenor::months(6), 10.0));
        assert!(parse_point("10Y").is_err());
        assert!(parse_point("ten=5").is_err());
        assert!(parse_point("10Y=abc").is_err());
        assert!(parse_point("10Y=inf").is_err());
    }
}
