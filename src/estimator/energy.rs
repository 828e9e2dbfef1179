use crate::models::{EnergyResult, ModelInfo};

use super::tokens::estimate_token_count;

/// kWh per billion parameters per token.
pub const ALPHA: f64 = 8.91e-8;
/// Fixed kWh per token regardless of model size.
pub const BETA: f64 = 1.43e-6;
/// Datacenter Power Usage Effectiveness.
pub const PUE: f64 = 1.2;
/// Parameter count (billions) assumed when no model is selected.
pub const DEFAULT_MODEL_PARAMS: f64 = 7.0;
/// Completion length relative to the prompt when no override is given.
pub const OUTPUT_TO_INPUT_RATIO: u64 = 3;

/// GPU energy per token in kWh for a model of `model_params` billion parameters.
#[must_use]
pub fn energy_per_token(model_params: f64) -> f64 {
    ALPHA * model_params + BETA
}

/// Estimate the energy of answering `input_text`.
///
/// `output_tokens` overrides the completion length; `None` and `Some(0)` both
/// fall back to three times the prompt length. Without a model the estimate
/// uses a 7B baseline. Token totals saturate at `u64::MAX`.
#[must_use]
pub fn calculate_energy(
    input_text: &str,
    output_tokens: Option<u64>,
    model: Option<&ModelInfo>,
) -> EnergyResult {
    let input_tokens = estimate_token_count(input_text);
    let output_tokens = match output_tokens {
        Some(n) if n > 0 => n,
        _ => input_tokens.saturating_mul(OUTPUT_TO_INPUT_RATIO),
    };
    let total_tokens = input_tokens.saturating_add(output_tokens);

    let model_params = model.map_or(DEFAULT_MODEL_PARAMS, |m| m.parameters);
    let gpu_energy_kwh = total_tokens as f64 * energy_per_token(model_params);
    let energy_kwh = gpu_energy_kwh * PUE;

    EnergyResult {
        input_tokens,
        output_tokens,
        total_tokens,
        energy_kwh,
        energy_wh: energy_kwh * 1000.0,
        model_params,
        model_name: model.map(|m| m.name.clone()),
    }
}
