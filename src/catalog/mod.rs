//! Model and equivalence catalogs.
//!
//! The built-in tables are embedded TOML resources. They can be extended or
//! overridden from the user config, and the merged result is validated once
//! so the estimator can divide by catalog values without checks.

mod validate;

use serde::Deserialize;

use crate::config::CatalogSettings;
use crate::error::{Result, WttError};
use crate::models::{EquivalenceDefinition, ModelInfo};

pub use validate::{validate_equivalences, validate_models};

const BUILTIN_MODELS: &str = include_str!("../../assets/models.toml");
const BUILTIN_EQUIVALENCES: &str = include_str!("../../assets/equivalences.toml");

#[derive(Deserialize)]
struct ModelTable {
    models: Vec<ModelInfo>,
}

#[derive(Deserialize)]
struct EquivalenceTable {
    equivalences: Vec<EquivalenceDefinition>,
}

/// Immutable, validated catalog data.
#[derive(Debug, Clone)]
pub struct Catalog {
    models: Vec<ModelInfo>,
    equivalences: Vec<EquivalenceDefinition>,
}

impl Catalog {
    /// The built-in catalog with no user extensions.
    pub fn builtin() -> Result<Self> {
        Self::load(&CatalogSettings::default())
    }

    /// Built-in catalog merged with the entries from `settings`.
    pub fn load(settings: &CatalogSettings) -> Result<Self> {
        let mut models = toml::from_str::<ModelTable>(BUILTIN_MODELS)?.models;
        let mut equivalences = toml::from_str::<EquivalenceTable>(BUILTIN_EQUIVALENCES)?.equivalences;

        merge_by_id(&mut models, &settings.models, |m| m.id.as_str());
        merge_by_id(&mut equivalences, &settings.equivalences, |e| e.id.as_str());

        let catalog = Self::from_parts(models, equivalences)?;
        tracing::debug!(
            models = catalog.models.len(),
            equivalences = catalog.equivalences.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Build a catalog from explicit tables, validating every entry.
    pub fn from_parts(
        models: Vec<ModelInfo>,
        equivalences: Vec<EquivalenceDefinition>,
    ) -> Result<Self> {
        validate_models(&models)?;
        validate_equivalences(&equivalences)?;
        Ok(Self {
            models,
            equivalences,
        })
    }

    #[must_use]
    pub fn models(&self) -> &[ModelInfo] {
        &self.models
    }

    /// Look up a model by id.
    #[must_use]
    pub fn model(&self, id: &str) -> Option<&ModelInfo> {
        self.models.iter().find(|m| m.id == id)
    }

    /// Look up a model by id, failing with [`WttError::ModelNotFound`].
    pub fn require_model(&self, id: &str) -> Result<&ModelInfo> {
        self.model(id).ok_or_else(|| WttError::ModelNotFound { id: id.to_string() })
    }

    /// Models grouped by provider. Providers appear in catalog order.
    #[must_use]
    pub fn models_by_provider(&self) -> Vec<(&str, Vec<&ModelInfo>)> {
        let mut groups: Vec<(&str, Vec<&ModelInfo>)> = Vec::new();
        for model in &self.models {
            match groups.iter().position(|(p, _)| *p == model.provider) {
                Some(idx) => groups[idx].1.push(model),
                None => groups.push((model.provider.as_str(), vec![model])),
            }
        }
        groups
    }

    /// All equivalence definitions in display order, enabled or not.
    #[must_use]
    pub fn equivalences(&self) -> &[EquivalenceDefinition] {
        &self.equivalences
    }

    pub fn enabled_equivalences(&self) -> impl Iterator<Item = &EquivalenceDefinition> {
        self.equivalences.iter().filter(|e| e.enabled)
    }
}

/// Replace entries with a matching id in place, append the rest.
fn merge_by_id<T: Clone>(base: &mut Vec<T>, extra: &[T], id: impl Fn(&T) -> &str) {
    for entry in extra {
        match base.iter().position(|b| id(b) == id(entry)) {
            Some(idx) => base[idx] = entry.clone(),
            None => base.push(entry.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EquivalenceUnit, ModelType};

    #[test]
    fn builtin_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.models().len(), 16);
        assert_eq!(catalog.equivalences().len(), 6);
    }

    #[test]
    fn builtin_model_lookup() {
        let catalog = Catalog::builtin().unwrap();
        let gpt = catalog.model("gpt-4o").unwrap();
        assert_eq!(gpt.name, "GPT-4o");
        assert_eq!(gpt.parameters, 220.0);
        assert_eq!(gpt.model_type, ModelType::Moe);

        let mixtral = catalog.model("mixtral-8x7b").unwrap();
        assert_eq!(mixtral.parameters, 12.9);
        assert!(catalog.model("gpt-5").is_none());
    }

    #[test]
    fn require_model_reports_id() {
        let catalog = Catalog::builtin().unwrap();
        let err = catalog.require_model("nope").unwrap_err();
        assert!(matches!(err, WttError::ModelNotFound { ref id } if id == "nope"));
    }

    #[test]
    fn providers_in_first_appearance_order() {
        let catalog = Catalog::builtin().unwrap();
        let groups = catalog.models_by_provider();
        let providers: Vec<&str> = groups.iter().map(|(p, _)| *p).collect();
        assert_eq!(
            providers,
            ["OpenAI", "Anthropic", "Google", "Meta", "Mistral AI"]
        );
        let meta = &groups[3].1;
        assert_eq!(meta.len(), 3);
        assert_eq!(meta[0].id, "llama-3.1-405b");
    }

    #[test]
    fn builtin_equivalences_in_display_order() {
        let catalog = Catalog::builtin().unwrap();
        let ids: Vec<&str> = catalog.equivalences().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["led-bulb", "laptop", "microwave", "phone-charge", "tv", "ac"]);

        let enabled: Vec<&str> = catalog.enabled_equivalences().map(|e| e.id.as_str()).collect();
        assert_eq!(enabled.len(), 5);
        assert!(!enabled.contains(&"ac"));

        let phone = &catalog.equivalences()[3];
        assert_eq!(phone.unit, EquivalenceUnit::Charges);
        assert_eq!(phone.power_watts, 12.0);
    }

    #[test]
    fn extensions_append_and_override() {
        let settings = CatalogSettings {
            models: vec![
                ModelInfo::new("tiny", "Tiny", "Acme", 1.0, ModelType::Dense),
                ModelInfo::new("gpt-4o", "GPT-4o (tuned)", "OpenAI", 200.0, ModelType::Moe),
            ],
            equivalences: vec![EquivalenceDefinition {
                enabled: true,
                ..EquivalenceDefinition::new("ac", "AC", 1500.0, EquivalenceUnit::Seconds)
            }],
        };
        let catalog = Catalog::load(&settings).unwrap();

        assert_eq!(catalog.models().len(), 17);
        assert_eq!(catalog.models()[0].name, "GPT-4o (tuned)");
        assert_eq!(catalog.models().last().unwrap().id, "tiny");
        assert_eq!(catalog.enabled_equivalences().count(), 6);
    }

    #[test]
    fn invalid_extension_is_rejected() {
        let settings = CatalogSettings {
            models: vec![ModelInfo::new("zero", "Zero", "Acme", 0.0, ModelType::Dense)],
            equivalences: vec![],
        };
        let err = Catalog::load(&settings).unwrap_err();
        assert!(matches!(err, WttError::InvalidCatalog { ref id, .. } if id == "zero"));
    }
}
