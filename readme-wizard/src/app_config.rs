//! Tool configuration from readme-wizard.toml

use crate::badge_catalog::{BadgeCatalog, CatalogError};
use crate::markdown_generator::GeneratorOptions;
use crate::preview::PreviewOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "readme-wizard.toml";

/// Main tool configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL linked from the README footer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,

    /// Extra badge catalog merged over the built-in one, relative to this file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    pub preview: PreviewConfig,

    pub generator: GeneratorConfig,

    /// Directory of the loaded file, used to resolve `catalog`
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

/// `[preview]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Render single newlines as line breaks
    pub hard_breaks: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            hard_breaks: true,
            title: None,
        }
    }
}

/// `[generator]` table; unset entries keep the built-in wording
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features_heading: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder_feature: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder_installation: Option<String>,
}

/// Errors that can occur when loading or saving the tool configuration
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum ConfigError {
    #[error("IO error for {path}: {source}", path = .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Badge catalog error: {0}")]
    CatalogError(#[from] CatalogError),
}

impl AppConfig {
    /// Load configuration from a readme-wizard.toml file
    ///
    /// # Parameters
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(AppConfig)` - Successfully loaded configuration
    /// * `Err(ConfigError)` - Error reading or parsing the configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config: AppConfig = toml::from_str(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);

        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load the explicitly named file, or the default file if it exists
    ///
    /// A missing default file yields the default configuration; a missing
    /// explicit file is an error.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::load(default_path)
                } else {
                    log::debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    /// Save configuration to a readme-wizard.toml file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;

        fs::write(path, content).map_err(|source| ConfigError::IoError {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(())
    }

    /// Built-in catalog with the configured extra catalog merged over it
    pub fn badge_catalog(&self) -> Result<BadgeCatalog, ConfigError> {
        let mut catalog = BadgeCatalog::builtin()?;

        if let Some(extra) = &self.catalog {
            let path = match &self.base_dir {
                Some(dir) if extra.is_relative() => dir.join(extra),
                _ => extra.clone(),
            };
            catalog.merge(BadgeCatalog::load(&path)?);
        }

        Ok(catalog)
    }

    /// Generator settings; `origin` replaces the configured origin when given
    pub fn generator_options(&self, origin: Option<String>) -> GeneratorOptions {
        let defaults = GeneratorOptions::default();
        let generator = &self.generator;

        GeneratorOptions {
            origin: origin.or_else(|| self.origin.clone()),
            features_heading: generator
                .features_heading
                .clone()
                .unwrap_or(defaults.features_heading),
            feature_placeholder: generator
                .placeholder_feature
                .clone()
                .unwrap_or(defaults.feature_placeholder),
            installation_placeholder: generator
                .placeholder_installation
                .clone()
                .unwrap_or(defaults.installation_placeholder),
        }
    }

    /// Preview page settings
    pub fn preview_options(&self) -> PreviewOptions {
        PreviewOptions {
            hard_breaks: self.preview.hard_breaks,
            title: self.preview.title.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();

        assert_eq!(config, AppConfig::default());
        assert!(config.preview.hard_breaks);
        assert_eq!(config.generator_options(None), GeneratorOptions::default());
    }

    #[test]
    fn test_parse_example_toml() {
        let toml_content = r###"
origin = "https://readme.example.com"

[preview]
hard_breaks = false
title = "Preview"

[generator]
features_heading = "## Features"
placeholder_installation = "TBD"
"###;

        let config: AppConfig = toml::from_str(toml_content).unwrap();
        let options = config.generator_options(None);

        assert_eq!(options.origin.as_deref(), Some("https://readme.example.com"));
        assert_eq!(options.features_heading, "## Features");
        assert_eq!(options.feature_placeholder, "- Add your first feature");
        assert_eq!(options.installation_placeholder, "TBD");

        let preview = config.preview_options();
        assert!(!preview.hard_breaks);
        assert_eq!(preview.title.as_deref(), Some("Preview"));
    }

    #[test]
    fn test_cli_origin_wins() {
        let config = AppConfig {
            origin: Some("https://configured.example".to_string()),
            ..AppConfig::default()
        };

        let options = config.generator_options(Some("https://flag.example".to_string()));

        assert_eq!(options.origin.as_deref(), Some("https://flag.example"));
    }

    #[test]
    fn test_save_then_load() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        let mut config = AppConfig::default();
        config.origin = Some("https://example.com".to_string());
        config.preview.title = Some("Docs".to_string());

        // Act
        config.save(&path).unwrap();
        let loaded = AppConfig::load(&path).unwrap();

        // Assert
        assert_eq!(loaded.origin, config.origin);
        assert_eq!(loaded.preview, config.preview);
        assert_eq!(loaded.generator, config.generator);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::discover(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(ConfigError::IoError { .. })));
    }

    #[test]
    fn test_extra_catalog_resolves_relative_to_config() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("badges.toml"),
            r#"
[[badge]]
id = "rust"
label = "Rust"
url = "https://img.shields.io/badge/Rust-000000?style=for-the-badge&logo=rust"
link = "https://www.rust-lang.org"
category = "language"

[[badge]]
id = "mit"
label = "License: MIT"
url = "https://img.shields.io/badge/License-MIT-green.svg"
link = "https://opensource.org/licenses/MIT"
category = "license"
"#,
        )
        .unwrap();
        let config_path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&config_path, "catalog = \"badges.toml\"\n").unwrap();

        // Act
        let catalog = AppConfig::load(&config_path).unwrap().badge_catalog().unwrap();

        // Assert
        assert_eq!(catalog.len(), 25);
        assert_eq!(catalog.resolve("rust").unwrap().label, "Rust");
        assert!(catalog.resolve("mit").unwrap().url.contains("green"));
    }

    #[test]
    fn test_broken_extra_catalog_is_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("badges.toml"), "[[badge]]\nid = \"\"\n").unwrap();
        let config_path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&config_path, "catalog = \"badges.toml\"\n").unwrap();

        let result = AppConfig::load(&config_path).unwrap().badge_catalog();

        assert!(matches!(result, Err(ConfigError::CatalogError(_))));
    }
}
