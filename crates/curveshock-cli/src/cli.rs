//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{AnalyzeArgs, CurveArgs};

/// Curveshock - Treasury yield curve shock scenarios
#[derive(Parser)]
#[command(name = "curveshock")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Configuration file (TOML)
    #[arg(short, long, global = true, env = "CURVESHOCK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Read `{year}.csv` files from this directory instead of the Treasury site
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show the latest Treasury par yield curve
    Curve(CurveArgs),

    /// Shock the latest curve and report duration and DV01 per tenor
    Analyze(AnalyzeArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}
