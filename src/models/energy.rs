use serde::Serialize;

/// Energy estimate for a single prompt/completion pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyResult {
    pub input_tokens: u64,
    pub output_tokens: u64,
    /// Always `input_tokens + output_tokens`.
    pub total_tokens: u64,
    pub energy_kwh: f64,
    /// Always `energy_kwh * 1000`.
    pub energy_wh: f64,
    /// Parameter count (billions) the estimate was computed with.
    pub model_params: f64,
    /// Display name of the selected model, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
}
