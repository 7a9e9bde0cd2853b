//! Analyze command implementation.
//!
//! Shocks the latest curve and reports duration and DV01 per tenor.

use std::collections::BTreeMap;

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;
use tabled::Tabled;

use curveshock_analytics::shock::ShockKind;
use curveshock_core::Tenor;
use curveshock_engine::{ScenarioAnalyzer, ScenarioReport, ScenarioRequest};

use crate::cli::OutputFormat;
use crate::commands::parse_point;
use crate::error::{CliError, CliResult};
use crate::output::{
    format_bps, format_pct, print_csv, print_header, print_json, print_table, KeyValue,
};

/// Arguments for the analyze command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Shock type
    #[arg(short, long, value_enum)]
    pub shock: ShockChoice,

    /// Shock size in basis points (negative steepener = flattener)
    #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
    pub magnitude: f64,

    /// Steepener pivot tenor in years (default: 2)
    #[arg(short, long)]
    pub pivot: Option<f64>,

    /// Custom shock point as TENOR=BPS (repeatable), e.g. --point 10Y=25
    #[arg(long = "point", value_parser = parse_point, allow_negative_numbers = true)]
    pub points: Vec<(Tenor, f64)>,
}

/// Shock choices on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShockChoice {
    /// Shift every tenor by the magnitude
    Parallel,
    /// Twist around the pivot; the longest tenor moves by the magnitude
    Steepener,
    /// Shift only the tenors given with --point
    Custom,
}

impl From<ShockChoice> for ShockKind {
    fn from(choice: ShockChoice) -> Self {
        match choice {
            ShockChoice::Parallel => ShockKind::Parallel,
            ShockChoice::Steepener => ShockKind::Steepener,
            ShockChoice::Custom => ShockKind::Custom,
        }
    }
}

impl AnalyzeArgs {
    /// Build the scenario request, rejecting options that do not apply.
    pub fn to_request(&self) -> CliResult<ScenarioRequest> {
        if self.pivot.is_some() && self.shock != ShockChoice::Steepener {
            return Err(CliError::InvalidArgument(
                "--pivot only applies to --shock steepener".to_string(),
            ));
        }
        if !self.points.is_empty() && self.shock != ShockChoice::Custom {
            return Err(CliError::InvalidArgument(
                "--point only applies to --shock custom".to_string(),
            ));
        }

        let custom_shocks = match self.shock {
            ShockChoice::Custom => {
                let mut shocks = BTreeMap::new();
                for (tenor, bps) in &self.points {
                    if shocks.insert(*tenor, *bps).is_some() {
                        return Err(CliError::InvalidArgument(format!(
                            "tenor {tenor} given more than once"
                        )));
                    }
                }
                Some(shocks)
            }
            _ => None,
        };

        Ok(ScenarioRequest {
            kind: self.shock.into(),
            magnitude_bps: self.magnitude,
            pivot_tenor: self.pivot,
            custom_shocks,
        })
    }
}

#[derive(Tabled)]
struct MetricRow {
    #[tabled(rename = "Tenor")]
    label: String,
    #[tabled(rename = "Original")]
    original: String,
    #[tabled(rename = "Shocked")]
    shocked: String,
    #[tabled(rename = "Change (bp)")]
    delta_bps: String,
    #[tabled(rename = "Mod Duration")]
    duration: String,
    #[tabled(rename = "DV01 (per $100)")]
    dv01: String,
}

#[derive(Serialize)]
struct MetricRecord {
    tenor: f64,
    label: String,
    original_yield: f64,
    shocked_yield: f64,
    delta_bps: f64,
    duration: f64,
    dv01: f64,
}

/// Execute the analyze command.
pub async fn execute(
    args: AnalyzeArgs,
    analyzer: &ScenarioAnalyzer,
    format: OutputFormat,
) -> Result<()> {
    let request = args.to_request()?;
    let report = analyzer.analyze(&request).await?;
    render(&report, format)
}

fn render(report: &ScenarioReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            print_header(&format!("Scenario: {}", report.description));
            let summary = vec![
                KeyValue::new("As Of", report.as_of.clone()),
                KeyValue::new("Shock Type", report.shock_type.to_string()),
                KeyValue::new("Tenors", report.metrics.len().to_string()),
            ];
            print_table(&summary)?;

            print_header("Tenor Risk");
            let rows: Vec<MetricRow> = report
                .metrics
                .iter()
                .map(|m| MetricRow {
                    label: m.tenor.label(),
                    original: report
                        .original_curve
                        .get(m.tenor)
                        .map(format_pct)
                        .unwrap_or_default(),
                    shocked: format_pct(m.yield_pct),
                    delta_bps: format_bps(m.delta_bps),
                    duration: format!("{:.4}", m.duration),
                    dv01: format!("{:.6}", m.dv01),
                })
                .collect();
            print_table(&rows)
        }
        OutputFormat::Json => print_json(report),
        OutputFormat::Csv => {
            let records: Vec<MetricRecord> = report
                .metrics
                .iter()
                .map(|m| MetricRecord {
                    tenor: m.tenor.as_years(),
                    label: m.tenor.label(),
                    original_yield: report.original_curve.get(m.tenor).unwrap_or(m.yield_pct),
                    shocked_yield: m.yield_pct,
                    delta_bps: m.delta_bps,
                    duration: m.duration,
                    dv01: m.dv01,
                })
                .collect();
            print_csv(&records)
        }
    }
}
