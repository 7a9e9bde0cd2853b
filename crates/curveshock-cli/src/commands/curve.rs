//! Curve command implementation.
//!
//! Displays the latest Treasury par yield curve.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use curveshock_core::CurveSnapshot;
use curveshock_engine::ScenarioAnalyzer;

use crate::cli::OutputFormat;
use crate::output::{format_pct, print_csv, print_header, print_json, print_table};

/// Arguments for the curve command.
#[derive(Args, Debug, Default)]
pub struct CurveArgs {}

#[derive(Tabled)]
struct CurveRow {
    #[tabled(rename = "Tenor")]
    label: String,
    #[tabled(rename = "Years")]
    years: String,
    #[tabled(rename = "Yield")]
    yield_pct: String,
}

#[derive(Serialize)]
struct CurveRecord {
    tenor: f64,
    label: String,
    #[serde(rename = "yield")]
    yield_pct: f64,
}

/// Execute the curve command.
pub async fn execute(
    _args: CurveArgs,
    analyzer: &ScenarioAnalyzer,
    format: OutputFormat,
) -> Result<()> {
    let snapshot = analyzer.current_curve().await?;
    render(&snapshot, format)
}

fn render(snapshot: &CurveSnapshot, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            print_header(&format!("US Treasury Par Yield Curve ({})", snapshot.as_of));
            let rows: Vec<CurveRow> = snapshot
                .curve
                .iter()
                .map(|(tenor, y)| CurveRow {
                    label: tenor.label(),
                    years: format!("{:.4}", tenor.as_years()),
                    yield_pct: format_pct(y),
                })
                .collect();
            print_table(&rows)
        }
        OutputFormat::Json => print_json(snapshot),
        OutputFormat::Csv => {
            let records: Vec<CurveRecord> = snapshot
                .curve
                .iter()
                .map(|(tenor, y)| CurveRecord {
                    tenor: tenor.as_years(),
                    label: tenor.label(),
                    yield_pct: y,
                })
                .collect();
            print_csv(&records)
        }
    }
}
