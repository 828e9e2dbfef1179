use std::fmt::Write as _;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::estimator::equivalence::to_fixed;
use crate::models::EquivalenceResult;
use crate::operations::{
    CompareResult, EquivalencesResult, EstimateReport, ModelsResult, TokensResult,
};

/// Plain-text rendering for `--format text`.
pub trait TextRender {
    fn render_text(&self) -> String;
}

/// Format a result as minified JSON.
pub fn format_json<T: Serialize>(result: &T) -> String {
    serde_json::to_string(result).unwrap_or_else(|e| format_error(&e))
}

/// Format a result as indented JSON.
pub fn format_pretty<T: Serialize>(result: &T) -> String {
    serde_json::to_string_pretty(result).unwrap_or_else(|e| format_error(&e))
}

/// Format a result in the requested output format.
pub fn format_output<T: Serialize + TextRender>(result: &T, format: OutputFormat) -> String {
    match format {
        OutputFormat::Minified => format_json(result),
        OutputFormat::Pretty => format_pretty(result),
        OutputFormat::Text => result.render_text(),
    }
}

/// Format an error as JSON.
pub fn format_error(err: &dyn std::fmt::Display) -> String {
    serde_json::json!({ "error": err.to_string() }).to_string()
}

fn push_equivalences(out: &mut String, equivalences: &[EquivalenceResult]) {
    for eq in equivalences {
        let emoji = &eq.definition.emoji;
        let label = &eq.definition.label;
        let formatted = &eq.formatted;
        if emoji.is_empty() {
            let _ = writeln!(out, "  {label}: {formatted}");
        } else {
            let _ = writeln!(out, "  {emoji} {label}: {formatted}");
        }
    }
}

impl TextRender for EstimateReport {
    fn render_text(&self) -> String {
        let e = &self.energy;
        let mut out = String::new();
        let _ = writeln!(out, "Input tokens:        {}", e.input_tokens);
        let _ = writeln!(out, "Est. output tokens:  {}", e.output_tokens);
        let _ = writeln!(out, "Energy (Wh):         {}", to_fixed(e.energy_wh, 4));
        let _ = writeln!(out, "CO2 (grams):         {}", to_fixed(self.co2_grams, 2));
        if let Some(name) = &e.model_name {
            let _ = writeln!(out, "Model:               {name} ({}B parameters)", e.model_params);
        }
        out.push('\n');
        out.push_str("Your query could power:\n");
        push_equivalences(&mut out, &self.equivalences);
        out.push('\n');
        let basis = if e.model_name.is_some() {
            "the selected model's"
        } else {
            "typical LLM"
        };
        let _ = write!(
            out,
            "This is an estimate based on {basis} energy consumption. Actual values vary by \
             hardware, implementation, and datacenter efficiency."
        );
        out
    }
}

impl TextRender for TokensResult {
    fn render_text(&self) -> String {
        format!("{} characters, ~{} tokens", self.chars, self.tokens)
    }
}

impl TextRender for CompareResult {
    fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} Wh could power:", to_fixed(self.energy_wh, 4));
        push_equivalences(&mut out, &self.equivalences);
        out.trim_end().to_string()
    }
}

impl TextRender for ModelsResult {
    fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Average Model (~{}B parameters)", self.default_params);
        for group in &self.providers {
            let _ = writeln!(out, "\n{}", group.provider);
            for m in &group.models {
                let _ = writeln!(
                    out,
                    "  {:<20} {} ({}B params, {})",
                    m.id,
                    m.name,
                    m.parameters,
                    m.model_type.as_str()
                );
            }
        }
        out.trim_end().to_string()
    }
}

impl TextRender for EquivalencesResult {
    fn render_text(&self) -> String {
        let mut out = String::new();
        for def in &self.equivalences {
            let rate = match def.unit {
                crate::models::EquivalenceUnit::Charges => format!("{} Wh per charge", def.power_watts),
                unit => format!("{} W, shown in {unit}", def.power_watts),
            };
            let state = if def.enabled { "" } else { " [disabled]" };
            let _ = writeln!(out, "{:<14} {} ({rate}){state}", def.id, def.label);
        }
        out.trim_end().to_string()
    }
}
