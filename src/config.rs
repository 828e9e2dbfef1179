use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, WttError};
use crate::models::{EquivalenceDefinition, ModelInfo};

/// Directory holding wtt settings.
const WTT_DIR: &str = ".wtt";
/// Config filename.
const CONFIG_FILE: &str = "config.toml";

/// Settings resolved from a project directory.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the settings were resolved from.
    pub project_root: PathBuf,
    /// Path to the config file.
    pub config_path: PathBuf,
    /// User settings loaded from config.toml.
    pub settings: UserSettings,
}

/// User-configurable settings from .wtt/config.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// Output configuration.
    pub output: OutputSettings,
    /// Estimation defaults.
    pub estimate: EstimateSettings,
    /// Catalog extensions.
    pub catalog: CatalogSettings,
}

/// How command results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Single-line JSON.
    #[default]
    Minified,
    /// Indented JSON.
    Pretty,
    /// Plain text for humans.
    Text,
}

/// Output-related settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

/// Defaults applied when a command does not specify them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EstimateSettings {
    /// Model id used when `--model` is absent.
    pub default_model: Option<String>,
    /// Completion length used when `--output-tokens` is absent.
    pub output_tokens: Option<u64>,
}

/// Extra catalog entries. An entry whose id matches a built-in entry replaces it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    pub models: Vec<ModelInfo>,
    pub equivalences: Vec<EquivalenceDefinition>,
}

impl Config {
    /// Resolve settings for a given project root.
    ///
    /// A missing config file yields the defaults. A file that exists but
    /// cannot be read or deserialized is an error.
    pub fn new(project_root: impl Into<PathBuf>) -> Result<Self> {
        let project_root = project_root.into();
        let config_path = project_root.join(WTT_DIR).join(CONFIG_FILE);
        let settings = Self::load_settings(&config_path)?;

        Ok(Self {
            project_root,
            config_path,
            settings,
        })
    }

    /// Create config from the current working directory.
    pub fn from_cwd() -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| WttError::Config(format!("cannot get cwd: {e}")))?;
        Self::new(cwd)
    }

    fn load_settings(config_path: &Path) -> Result<UserSettings> {
        if !config_path.exists() {
            return Ok(UserSettings::default());
        }
        let content = std::fs::read_to_string(config_path)?;
        let settings = toml::from_str(&content)
            .map_err(|e| WttError::Config(format!("{}: {e}", config_path.display())))?;
        tracing::debug!(path = %config_path.display(), "config loaded");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EquivalenceUnit;
    use tempfile::TempDir;

    fn project_with_config(toml: &str) -> TempDir {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join(WTT_DIR)).unwrap();
        std::fs::write(tmp.path().join(WTT_DIR).join(CONFIG_FILE), toml).unwrap();
        tmp
    }

    #[test]
    fn config_new_sets_paths() {
        let tmp = TempDir::new().unwrap();
        let cfg = Config::new(tmp.path()).unwrap();
        assert_eq!(cfg.project_root, tmp.path());
        assert_eq!(cfg.config_path, tmp.path().join(".wtt/config.toml"));
    }

    #[test]
    fn missing_config_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let settings = Config::new(tmp.path()).unwrap().settings;
        assert_eq!(settings.output.format, OutputFormat::Minified);
        assert!(settings.estimate.default_model.is_none());
        assert!(settings.estimate.output_tokens.is_none());
        assert!(settings.catalog.models.is_empty());
        assert!(settings.catalog.equivalences.is_empty());
    }

    #[test]
    fn load_full_settings() {
        let tmp = project_with_config(
            r#"
[output]
format = "pretty"

[estimate]
default_model = "gpt-4o"
output_tokens = 500

[[catalog.models]]
id = "tiny"
name = "Tiny"
provider = "Acme"
parameters = 1.0
type = "dense"

[[catalog.equivalences]]
id = "kettle"
label = "Kettle (2000W)"
power_watts = 2000.0
unit = "seconds"
"#,
        );

        let settings = Config::new(tmp.path()).unwrap().settings;
        assert_eq!(settings.output.format, OutputFormat::Pretty);
        assert_eq!(settings.estimate.default_model.as_deref(), Some("gpt-4o"));
        assert_eq!(settings.estimate.output_tokens, Some(500));
        assert_eq!(settings.catalog.models[0].id, "tiny");
        assert_eq!(settings.catalog.equivalences[0].unit, EquivalenceUnit::Seconds);
        assert!(settings.catalog.equivalences[0].enabled);
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let tmp = project_with_config("[output]\nformat = \"text\"\n");
        let cfg = Config::new(tmp.path()).unwrap();
        assert_eq!(cfg.settings.output.format, OutputFormat::Text);
        assert!(cfg.settings.estimate.default_model.is_none());
    }

    #[test]
    fn malformed_config_is_an_error() {
        let tmp = project_with_config("invalid toml {{{{");
        let err = Config::new(tmp.path()).unwrap_err();
        assert!(matches!(err, WttError::Config(_)));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn undeserializable_catalog_entry_is_an_error() {
        let tmp = project_with_config(
            r#"
[estimate]
default_model = "gpt-4"

[[catalog.equivalences]]
id = "kettle"
label = "Kettle"
power_watts = 2000.0
unit = "days"
"#,
        );
        let err = Config::new(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("days"), "{err}");
    }

    #[test]
    fn catalog_entry_missing_label_is_an_error() {
        let tmp = project_with_config(
            "[[catalog.equivalences]]\nid = \"kettle\"\npower_watts = 2000.0\nunit = \"hours\"\n",
        );
        assert!(Config::new(tmp.path()).is_err());
    }
}
