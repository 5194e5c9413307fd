// ABOUTME: Loads krds.toml from the config directory and applies environment overrides
// ABOUTME: Resolves catalog paths and turns the file into generator and logging settings

use anyhow::{Context, Result};
use krds_components::ComponentCatalog;
use krds_logging::LoggingConfig;
use krds_tokens::TokenCatalog;
use krds_types::Theme;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::generator::GeneratorOptions;

pub const CONFIG_FILE: &str = "krds.toml";

/// Catalog sources; the built-in sample catalogs are used when unset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub tokens: Option<PathBuf>,
    pub components: Option<PathBuf>,
}

/// Contents of `krds.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub generator: GeneratorOptions,
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// `<platform config dir>/krds`
    pub fn default_dir() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join("krds"))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Load configuration from the standard location
    pub fn load() -> Result<Self> {
        Self::load_from_dir(&Self::default_dir())
    }

    /// Load `krds.toml` from `dir`, falling back to defaults when it is missing.
    ///
    /// Relative catalog paths in the file are resolved against `dir`.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut config = Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;
        config.catalog.resolve_relative_to(dir);
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Apply environment variable overrides to this configuration.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(theme) = lookup("KRDS_THEME") {
            self.generator.default_theme = theme
                .parse::<Theme>()
                .context("Invalid KRDS_THEME value")?;
        }

        if lookup("KRDS_NO_UTILITIES").is_some() {
            self.generator.utilities = false;
        }

        if lookup("KRDS_NO_CACHE").is_some() {
            self.generator.cache_templates = false;
        }

        if let Some(path) = lookup("KRDS_TOKENS").filter(|path| !path.is_empty()) {
            self.catalog.tokens = Some(PathBuf::from(path));
        }

        if let Some(path) = lookup("KRDS_COMPONENTS").filter(|path| !path.is_empty()) {
            self.catalog.components = Some(PathBuf::from(path));
        }

        Ok(())
    }

    pub fn load_tokens(&self) -> Result<TokenCatalog> {
        match &self.catalog.tokens {
            Some(path) => TokenCatalog::from_path(path)
                .with_context(|| format!("Failed to load tokens from {}", path.display())),
            None => TokenCatalog::builtin().context("Built-in token catalog is invalid"),
        }
    }

    pub fn load_components(&self) -> Result<ComponentCatalog> {
        match &self.catalog.components {
            Some(path) => ComponentCatalog::from_path(path)
                .with_context(|| format!("Failed to load components from {}", path.display())),
            None => ComponentCatalog::builtin().context("Built-in component catalog is invalid"),
        }
    }
}

impl CatalogConfig {
    fn resolve_relative_to(&mut self, dir: &Path) {
        for path in [&mut self.tokens, &mut self.components].into_iter().flatten() {
            if path.is_relative() {
                *path = dir.join(&*path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::tempdir;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from_dir(dir.path()).unwrap();

        assert_eq!(config.generator, GeneratorOptions::default());
        assert_eq!(config.catalog, CatalogConfig::default());
    }

    #[test]
    fn test_parse_full_file() {
        let config = Config::from_toml_str(
            r#"
[generator]
default_theme = "dark"
utilities = false

[catalog]
tokens = "/srv/krds/tokens.json"

[logging]
level = "debug"
"#,
        )
        .unwrap();

        assert_eq!(config.generator.default_theme, Theme::Dark);
        assert!(!config.generator.utilities);
        assert!(config.generator.cache_templates);
        assert_eq!(
            config.catalog.tokens.as_deref(),
            Some(Path::new("/srv/krds/tokens.json"))
        );
        assert_eq!(config.catalog.components, None);
        assert_eq!(config.logging.level.0, krds_logging::Level::DEBUG);
    }

    #[test]
    fn test_invalid_theme_is_rejected() {
        let result = Config::from_toml_str("[generator]\ndefault_theme = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_relative_catalog_paths_resolve_against_config_dir() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "[catalog]\ntokens = \"tokens.json\"\ncomponents = \"/abs/components.json\"\n",
        )
        .unwrap();
        fs::write(dir.path().join("tokens.json"), r#"{"krds-spacing-4": "20px"}"#).unwrap();

        let config = Config::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.catalog.tokens, Some(dir.path().join("tokens.json")));
        assert_eq!(
            config.catalog.components,
            Some(PathBuf::from("/abs/components.json"))
        );

        let tokens = config.load_tokens().unwrap();
        assert_eq!(tokens.get("krds-spacing-4"), Some("20px"));
        assert!(config.load_components().is_err());
    }

    #[test]
    fn test_broken_file_reports_its_path() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[generator\n").unwrap();

        let error = Config::load_from_dir(dir.path()).unwrap_err();
        assert!(format!("{error}").contains(CONFIG_FILE));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_overrides_from(vars(&[
                ("KRDS_THEME", "Dark"),
                ("KRDS_NO_UTILITIES", "1"),
                ("KRDS_NO_CACHE", ""),
                ("KRDS_TOKENS", "custom.json"),
                ("KRDS_COMPONENTS", ""),
            ]))
            .unwrap();

        assert_eq!(config.generator.default_theme, Theme::Dark);
        assert!(!config.generator.utilities);
        assert!(!config.generator.cache_templates);
        assert_eq!(config.catalog.tokens, Some(PathBuf::from("custom.json")));
        assert_eq!(config.catalog.components, None);

        let mut config = Config::default();
        assert!(config.apply_overrides_from(vars(&[("KRDS_THEME", "sepia")])).is_err());
    }

    #[test]
    fn test_builtin_catalogs_by_default() {
        let config = Config::default();
        assert!(!config.load_tokens().unwrap().is_empty());
        assert!(config.load_components().unwrap().contains("button"));
    }
}
