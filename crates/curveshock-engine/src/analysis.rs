//! Scenario analysis: fetch the curve, shock it, compute per-tenor risk.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use curveshock_analytics::metrics::{tenor_metrics, TenorMetric};
use curveshock_analytics::shock::{ShockKind, ShockSpec, DEFAULT_PIVOT_TENOR};
use curveshock_core::{CurveSnapshot, Tenor, YieldCurve};

use crate::error::EngineResult;
use crate::provider::CurveProvider;

/// A scenario as callers describe it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioRequest {
    /// Shock type.
    pub kind: ShockKind,
    /// Magnitude in basis points (parallel and steepener).
    pub magnitude_bps: f64,
    /// Steepener pivot in years; 2.0 when absent.
    pub pivot_tenor: Option<f64>,
    /// Custom shocks by tenor; empty when absent.
    pub custom_shocks: Option<BTreeMap<Tenor, f64>>,
}

impl ScenarioRequest {
    /// A parallel shift request.
    pub fn parallel(magnitude_bps: f64) -> Self {
        Self {
            kind: ShockKind::Parallel,
            magnitude_bps,
            pivot_tenor: None,
            custom_shocks: None,
        }
    }

    /// A steepener (or flattener, for negative magnitudes) request.
    pub fn steepener(magnitude_bps: f64, pivot_tenor: Option<f64>) -> Self {
        Self {
            kind: ShockKind::Steepener,
            magnitude_bps,
            pivot_tenor,
            custom_shocks: None,
        }
    }

    /// A custom point-shock request.
    pub fn custom(shocks: BTreeMap<Tenor, f64>) -> Self {
        Self {
            kind: ShockKind::Custom,
            magnitude_bps: 0.0,
            pivot_tenor: None,
            custom_shocks: Some(shocks),
        }
    }

    /// Resolve defaults into a concrete shock.
    pub fn to_spec(&self) -> ShockSpec {
        match self.kind {
            ShockKind::Parallel => ShockSpec::parallel(self.magnitude_bps),
            ShockKind::Steepener => ShockSpec::steepener(
                self.magnitude_bps,
                self.pivot_tenor.unwrap_or(DEFAULT_PIVOT_TENOR),
            ),
            ShockKind::Custom => ShockSpec::custom(self.custom_shocks.clone().unwrap_or_default()),
        }
    }
}

/// Result of a scenario run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    /// Observation date of the curve that was shocked.
    pub as_of: String,
    /// Shock type.
    pub shock_type: ShockKind,
    /// Human-readable shock description.
    pub description: String,
    /// Curve before the shock.
    pub original_curve: YieldCurve,
    /// Curve after the shock.
    pub shocked_curve: YieldCurve,
    /// Risk at each tenor of the original curve.
    pub metrics: Vec<TenorMetric>,
}

/// Runs scenarios against the provider's current curve.
pub struct ScenarioAnalyzer {
    provider: Arc<CurveProvider>,
}

impl ScenarioAnalyzer {
    /// Create an analyzer over `provider`.
    pub fn new(provider: Arc<CurveProvider>) -> Self {
        Self { provider }
    }

    /// The underlying provider.
    pub fn provider(&self) -> &Arc<CurveProvider> {
        &self.provider
    }

    /// Current curve, unshocked.
    pub async fn current_curve(&self) -> EngineResult<Arc<CurveSnapshot>> {
        self.provider.fetch().await
    }

    /// Run one scenario.
    ///
    /// Parameters that are invalid on any curve are rejected before the
    /// curve is fetched; the pivot range check needs the curve itself.
    pub async fn analyze(&self, request: &ScenarioRequest) -> EngineResult<ScenarioReport> {
        let spec = request.to_spec();
        spec.validate(&YieldCurve::new())?;

        let snapshot = self.provider.fetch().await?;
        spec.validate(&snapshot.curve)?;

        let shocked = spec.apply(&snapshot.curve);
        let metrics = tenor_metrics(&snapshot.curve, &shocked);
        let description = spec.description();

        info!(as_of = %snapshot.as_of, scenario = %description, tenors = metrics.len(), "scenario analyzed");

        Ok(ScenarioReport {
            as_of: snapshot.as_of.clone(),
            shock_type: spec.kind(),
            description,
            original_curve: snapshot.curve.clone(),
            shocked_curve: shocked,
            metrics,
        })
    }
}
