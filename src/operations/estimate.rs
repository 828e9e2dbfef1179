//! Full estimate pipeline shared between CLI and MCP.
//!
//! Runs tokens -> energy -> CO2 -> equivalences for one query and bundles
//! the outcome into a single report.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::config::EstimateSettings;
use crate::error::{Result, WttError};
use crate::estimator::{calculate_co2_grams, calculate_energy, evaluate_enabled, is_blank};
use crate::models::{EnergyResult, EquivalenceResult};

/// Result of estimating one query.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateReport {
    #[serde(flatten)]
    pub energy: EnergyResult,
    /// CO2 emitted, in grams.
    pub co2_grams: f64,
    /// Enabled equivalences in catalog order.
    pub equivalences: Vec<EquivalenceResult>,
}

/// Parameters of an estimate request.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimateRequest<'a> {
    pub query: &'a str,
    /// Catalog model id; `None` uses the default model size.
    pub model_id: Option<&'a str>,
    /// Completion length override.
    pub output_tokens: Option<u64>,
}

impl<'a> EstimateRequest<'a> {
    /// Fill an unset model or output length from the configured defaults.
    #[must_use]
    pub fn or_defaults(self, defaults: &'a EstimateSettings) -> Self {
        Self {
            model_id: self.model_id.or(defaults.default_model.as_deref()),
            output_tokens: self.output_tokens.or(defaults.output_tokens),
            ..self
        }
    }
}

/// Estimate the energy impact of a query.
///
/// Blank queries are rejected before any calculation happens.
pub fn estimate(catalog: &Catalog, request: &EstimateRequest<'_>) -> Result<EstimateReport> {
    if is_blank(request.query) {
        return Err(WttError::EmptyQuery);
    }

    let model = request
        .model_id
        .map(|id| catalog.require_model(id))
        .transpose()?;

    let energy = calculate_energy(request.query, request.output_tokens, model);
    let co2_grams = calculate_co2_grams(energy.energy_kwh);
    let equivalences = evaluate_enabled(energy.energy_wh, catalog.equivalences());

    tracing::debug!(
        tokens = energy.total_tokens,
        energy_wh = energy.energy_wh,
        model = model.map(|m| m.id.as_str()),
        "estimate computed"
    );

    Ok(EstimateReport {
        energy,
        co2_grams,
        equivalences,
    })
}
