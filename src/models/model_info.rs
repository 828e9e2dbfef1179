use serde::{Deserialize, Serialize};

/// Architecture of a catalogued model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelType {
    Dense,
    /// Mixture of experts. `parameters` holds the active parameter count.
    Moe,
}

impl ModelType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dense => "dense",
            Self::Moe => "moe",
        }
    }
}

/// A model entry from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Unique catalog identifier (e.g. "gpt-4o").
    pub id: String,
    /// Display name.
    pub name: String,
    /// Vendor used for grouping.
    pub provider: String,
    /// Parameter count in billions.
    pub parameters: f64,
    #[serde(rename = "type")]
    pub model_type: ModelType,
    #[serde(default)]
    pub description: String,
}

impl ModelInfo {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        provider: impl Into<String>,
        parameters: f64,
        model_type: ModelType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            provider: provider.into(),
            parameters,
            model_type,
            description: String::new(),
        }
    }
}
