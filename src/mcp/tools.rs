//! MCP tool parameter types.
//!
//! Each struct corresponds to the input parameters for one MCP tool.
//! All parameter structs derive `Deserialize` and `JsonSchema` as required by rmcp.

use serde::Deserialize;

// ── Estimate ────────────────────────────────────────────────────

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EstimateParams {
    /// The LLM query text to estimate.
    #[schemars(description = "The LLM query text to estimate")]
    pub query: String,
    /// Optional catalog model id.
    #[schemars(description = "Model id from the models tool (default: average ~7B model)")]
    pub model: Option<String>,
    /// Optional completion length override.
    #[schemars(description = "Expected output tokens (default: 3x input tokens)")]
    pub output_tokens: Option<u64>,
}

// ── Tokens ──────────────────────────────────────────────────────

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct TokensParams {
    /// Text to measure.
    #[schemars(description = "Text to estimate the token count of")]
    pub text: String,
}

// ── Compare ─────────────────────────────────────────────────────

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CompareParams {
    /// Energy amount in watt-hours.
    #[schemars(description = "Energy in watt-hours (finite, non-negative)")]
    pub energy_wh: f64,
}

// ── Models ──────────────────────────────────────────────────────

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ModelsParams {
    /// Optional provider filter.
    #[schemars(description = "Only list models of this provider (case-insensitive)")]
    pub provider: Option<String>,
}

// ── Equivalences ────────────────────────────────────────────────

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EquivalencesParams {
    /// Include disabled equivalences.
    #[schemars(description = "Include disabled equivalences (default: false)")]
    pub all: Option<bool>,
}
