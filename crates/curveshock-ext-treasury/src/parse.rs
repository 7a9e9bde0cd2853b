//! Parser for the Treasury daily par yield curve CSV.
//!
//! The document is newest-first: the first record is the header row
//! (`Date,"1 Mo","2 Mo",...,"30 Yr"`) and the second is the latest observation.
//! Only that row is read.

use tracing::debug;

use curveshock_core::{CurveSnapshot, ParsePolicy, Tenor, YieldCurve};
use curveshock_traits::TraitError;

/// Cell marker the Treasury uses for "no data".
pub const NO_DATA: &str = "ND";

/// Column headers recognised as curve tenors, in curve order.
pub const TENOR_COLUMNS: [&str; 13] = [
    "1 Mo", "2 Mo", "3 Mo", "4 Mo", "6 Mo", "1 Yr", "2 Yr", "3 Yr", "5 Yr", "7 Yr", "10 Yr",
    "20 Yr", "30 Yr",
];

/// Tenor for a column header, or `None` for non-tenor columns (date, 1.5 month, ...).
pub fn tenor_for_column(header: &str) -> Option<Tenor> {
    match header.trim() {
        "1 Mo" => Some(Tenor::months(1)),
        "2 Mo" => Some(Tenor::months(2)),
        "3 Mo" => Some(Tenor::months(3)),
        "4 Mo" => Some(Tenor::months(4)),
        "6 Mo" => Some(Tenor::months(6)),
        "1 Yr" => Some(Tenor::years(1)),
        "2 Yr" => Some(Tenor::years(2)),
        "3 Yr" => Some(Tenor::years(3)),
        "5 Yr" => Some(Tenor::years(5)),
        "7 Yr" => Some(Tenor::years(7)),
        "10 Yr" => Some(Tenor::years(10)),
        "20 Yr" => Some(Tenor::years(20)),
        "30 Yr" => Some(Tenor::years(30)),
        _ => None,
    }
}

/// Parses the newest observation out of a daily curve CSV document.
///
/// Empty and `ND` cells are absent, not zero. Cells that are not numbers are
/// skipped under [`ParsePolicy::Lenient`] and fail the document under
/// [`ParsePolicy::Strict`]. A header with no data row is an error.
pub fn parse_daily_curve(text: &str, policy: ParsePolicy) -> Result<CurveSnapshot, TraitError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.trim().as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| TraitError::ParseError(e.to_string()))?
        .clone();

    let row = match reader.records().next() {
        Some(record) => record.map_err(|e| TraitError::ParseError(e.to_string()))?,
        None => {
            return Err(TraitError::ParseError(
                "CSV is empty (no data rows)".to_string(),
            ))
        }
    };

    let as_of = row
        .get(0)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| TraitError::ParseError("missing observation date".to_string()))?
        .to_string();

    let mut points: Vec<(Tenor, f64)> = Vec::with_capacity(TENOR_COLUMNS.len());
    for (i, header) in headers.iter().enumerate() {
        let Some(tenor) = tenor_for_column(header) else {
            continue;
        };
        if points.iter().any(|(t, _)| *t == tenor) {
            debug!(column = header, "duplicate tenor column ignored");
            continue;
        }
        let Some(cell) = row.get(i) else {
            debug!(column = header, "row shorter than header");
            continue;
        };
        if cell.is_empty() || cell == NO_DATA {
            continue;
        }
        match cell.parse::<f64>() {
            Ok(value) if value.is_finite() => points.push((tenor, value)),
            _ => match policy {
                ParsePolicy::Lenient => {
                    debug!(column = header, cell, "unparsable cell skipped");
                }
                ParsePolicy::Strict => {
                    return Err(TraitError::ParseError(format!(
                        "unparsable value '{cell}' in column '{header}'"
                    )));
                }
            },
        }
    }

    let curve =
        YieldCurve::try_from_points(points).map_err(|e| TraitError::ParseError(e.to_string()))?;
    Ok(CurveSnapshot::new(as_of, curve))
}
