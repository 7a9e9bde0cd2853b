//! Curveshock CLI - Treasury yield curve shock scenarios.
//!
//! # Usage
//!
//! ```bash
//! # Show the latest curve
//! curveshock curve
//!
//! # +100bp parallel shift
//! curveshock analyze --shock parallel --magnitude 100
//!
//! # 50bp flattener around the 5 year point, as JSON
//! curveshock --format json analyze --shock steepener --magnitude -50 --pivot 5
//!
//! # Custom point shocks against a local archive of {year}.csv files
//! curveshock --data-dir ./curves analyze --shock custom --point 10Y=25 --point 30Y=40
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use curveshock_config::{CurveshockConfig, LoggingConfig, SourceKind};
use curveshock_engine::{CurveProviderBuilder, ScenarioAnalyzer};
use curveshock_ext_treasury::create_curve_source;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    init_tracing(&config.logging);
    debug!(source = ?config.source.kind, ttl_secs = config.cache.ttl_secs, "configuration loaded");

    let analyzer = build_analyzer(&config)?;

    // Execute command
    let format = cli.format;
    match cli.command {
        Commands::Curve(args) => commands::curve::execute(args, &analyzer, format).await?,
        Commands::Analyze(args) => commands::analyze::execute(args, &analyzer, format).await?,
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<CurveshockConfig> {
    let mut config = match &cli.config {
        Some(path) => CurveshockConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => CurveshockConfig::default(),
    };

    if let Some(dir) = &cli.data_dir {
        config.source.kind = SourceKind::Directory;
        config.source.directory = Some(dir.clone());
    }

    config.validate()?;
    Ok(config)
}

/// Logs go to stderr so table, JSON and CSV output on stdout stays clean.
fn init_tracing(logging: &LoggingConfig) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| logging.filter.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn build_analyzer(config: &CurveshockConfig) -> Result<ScenarioAnalyzer> {
    let source = create_curve_source(&config.source)?;
    let provider = CurveProviderBuilder::new()
        .with_config(config)
        .with_source(source)
        .build()?;
    Ok(ScenarioAnalyzer::new(Arc::new(provider)))
}
