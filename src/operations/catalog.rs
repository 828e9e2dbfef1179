//! Catalog listings shared between CLI and MCP.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::estimator::DEFAULT_MODEL_PARAMS;
use crate::models::{EquivalenceDefinition, ModelInfo};

/// Models of one provider.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderGroup {
    pub provider: String,
    pub models: Vec<ModelInfo>,
}

/// Result of listing the model catalog.
#[derive(Debug, Clone, Serialize)]
pub struct ModelsResult {
    /// Parameter count (billions) used when no model is selected.
    pub default_params: f64,
    pub providers: Vec<ProviderGroup>,
}

/// Result of listing the equivalence catalog.
#[derive(Debug, Clone, Serialize)]
pub struct EquivalencesResult {
    pub equivalences: Vec<EquivalenceDefinition>,
}

/// List models grouped by provider, optionally restricted to one provider
/// (case-insensitive).
#[must_use]
pub fn list_models(catalog: &Catalog, provider: Option<&str>) -> ModelsResult {
    let providers = catalog
        .models_by_provider()
        .into_iter()
        .filter(|(p, _)| provider.map_or(true, |want| p.eq_ignore_ascii_case(want)))
        .map(|(p, models)| ProviderGroup {
            provider: p.to_string(),
            models: models.into_iter().cloned().collect(),
        })
        .collect();

    ModelsResult {
        default_params: DEFAULT_MODEL_PARAMS,
        providers,
    }
}

/// List equivalence definitions in display order.
#[must_use]
pub fn list_equivalences(catalog: &Catalog, include_disabled: bool) -> EquivalencesResult {
    EquivalencesResult {
        equivalences: catalog
            .equivalences()
            .iter()
            .filter(|e| include_disabled || e.enabled)
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_models_groups_all() {
        let catalog = Catalog::builtin().unwrap();
        let result = list_models(&catalog, None);
        assert_eq!(result.default_params, 7.0);
        assert_eq!(result.providers.len(), 5);
        let total: usize = result.providers.iter().map(|g| g.models.len()).sum();
        assert_eq!(total, 16);
    }

    #[test]
    fn list_models_filters_provider() {
        let catalog = Catalog::builtin().unwrap();
        let result = list_models(&catalog, Some("anthropic"));
        assert_eq!(result.providers.len(), 1);
        assert_eq!(result.providers[0].provider, "Anthropic");
        assert_eq!(result.providers[0].models.len(), 4);

        assert!(list_models(&catalog, Some("nobody")).providers.is_empty());
    }

    #[test]
    fn list_equivalences_hides_disabled() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(list_equivalences(&catalog, false).equivalences.len(), 5);
        let all = list_equivalences(&catalog, true);
        assert_eq!(all.equivalences.len(), 6);
        assert_eq!(all.equivalences[5].id, "ac");
    }
}
