use std::collections::HashSet;

use crate::error::{Result, WttError};
use crate::models::{EquivalenceDefinition, ModelInfo};

fn invalid(id: &str, detail: impl Into<String>) -> WttError {
    WttError::InvalidCatalog {
        id: id.to_string(),
        detail: detail.into(),
    }
}

fn check_id<'a>(seen: &mut HashSet<&'a str>, id: &'a str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(invalid(id, "id must not be empty"));
    }
    if !seen.insert(id) {
        return Err(invalid(id, "duplicate id"));
    }
    Ok(())
}

fn check_positive(id: &str, field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid(id, format!("{field} must be a positive number, got {value}")));
    }
    Ok(())
}

/// Reject empty or duplicate ids and non-positive parameter counts.
pub fn validate_models(models: &[ModelInfo]) -> Result<()> {
    let mut seen = HashSet::new();
    for model in models {
        check_id(&mut seen, &model.id)?;
        check_positive(&model.id, "parameters", model.parameters)?;
    }
    Ok(())
}

/// Reject empty or duplicate ids and non-positive `power_watts`.
pub fn validate_equivalences(definitions: &[EquivalenceDefinition]) -> Result<()> {
    let mut seen = HashSet::new();
    for def in definitions {
        check_id(&mut seen, &def.id)?;
        check_positive(&def.id, "power_watts", def.power_watts)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EquivalenceUnit, ModelType};

    #[test]
    fn accepts_valid_models() {
        let models = vec![
            ModelInfo::new("a", "A", "P", 7.0, ModelType::Dense),
            ModelInfo::new("b", "B", "P", 0.5, ModelType::Moe),
        ];
        assert!(validate_models(&models).is_ok());
    }

    #[test]
    fn rejects_duplicate_model_ids() {
        let models = vec![
            ModelInfo::new("a", "A", "P", 7.0, ModelType::Dense),
            ModelInfo::new("a", "A2", "P", 8.0, ModelType::Dense),
        ];
        let err = validate_models(&models).unwrap_err();
        assert!(err.to_string().contains("duplicate id"));
    }

    #[test]
    fn rejects_bad_parameters() {
        for params in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let models = vec![ModelInfo::new("a", "A", "P", params, ModelType::Dense)];
            assert!(validate_models(&models).is_err(), "params {params}");
        }
    }

    #[test]
    fn rejects_empty_id() {
        let models = vec![ModelInfo::new("  ", "A", "P", 7.0, ModelType::Dense)];
        assert!(validate_models(&models).is_err());
    }

    #[test]
    fn rejects_zero_power() {
        let defs = vec![EquivalenceDefinition::new("x", "X", 0.0, EquivalenceUnit::Charges)];
        let err = validate_equivalences(&defs).unwrap_err();
        assert!(err.to_string().contains("power_watts"));
    }
}
