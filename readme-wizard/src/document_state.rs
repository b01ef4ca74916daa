//! Document state: every value the wizard collects for one README
//!
//! A `DocumentState` is plain data. The generator reads it, the store
//! replaces it wholesale on every update, and the CLI loads it from a JSON or
//! TOML snapshot file. Any field may be missing or `null` in a snapshot; both
//! deserialize to the empty value.

use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Emoji used for the placeholder feature a fresh session starts with
pub const DEFAULT_FEATURE_EMOJI: &str = "🚀";

/// Emoji given to features appended after the first one
pub const NEW_FEATURE_EMOJI: &str = "✨";

/// All user-entered project metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentState {
    /// Project name, rendered as the document title
    #[serde(deserialize_with = "null_as_default")]
    pub project_name: String,

    /// Free-text description, inserted verbatim
    #[serde(deserialize_with = "null_as_default")]
    pub project_description: String,

    /// Logo image URL (or data URL); empty means no logo
    #[serde(deserialize_with = "null_as_default")]
    pub project_logo: String,

    /// Selected badge identifiers in selection order
    #[serde(deserialize_with = "null_as_default")]
    pub badges: Vec<String>,

    /// Pre-formatted installation Markdown
    #[serde(deserialize_with = "null_as_default")]
    pub installation: String,

    /// Pre-formatted directory tree
    #[serde(deserialize_with = "null_as_default")]
    pub project_structure: String,

    /// Feature bullets; entries with blank text are not rendered
    #[serde(deserialize_with = "null_as_default")]
    pub features: Vec<Feature>,

    /// Environment variables in insertion order
    #[serde(deserialize_with = "null_as_default")]
    pub environment_variables: Vec<EnvironmentVariable>,

    /// Author attribution
    #[serde(deserialize_with = "null_as_default")]
    pub author: Author,
}

impl Default for DocumentState {
    fn default() -> Self {
        Self {
            project_name: String::new(),
            project_description: String::new(),
            project_logo: String::new(),
            badges: Vec::new(),
            installation: String::new(),
            project_structure: String::new(),
            features: vec![Feature::new(DEFAULT_FEATURE_EMOJI, "")],
            environment_variables: Vec::new(),
            author: Author::default(),
        }
    }
}

/// A single feature bullet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feature {
    #[serde(deserialize_with = "null_as_default")]
    pub emoji: String,

    /// Either plain text or `Category: detail`
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
}

impl Feature {
    pub fn new(emoji: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            emoji: emoji.into(),
            text: text.into(),
        }
    }
}

/// An environment variable line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnvironmentVariable {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(deserialize_with = "null_as_default")]
    pub value: String,

    /// Secret values are replaced by a placeholder when rendered
    #[serde(deserialize_with = "null_as_default")]
    pub is_secret: bool,
}

impl EnvironmentVariable {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            is_secret: false,
        }
    }

    pub fn secret(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            is_secret: true,
            ..Self::new(name, value)
        }
    }
}

/// Author attribution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    /// Profile URL; empty renders the name as plain text
    #[serde(deserialize_with = "null_as_default")]
    pub link: String,
}

/// Snapshot file encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateFormat {
    Json,
    Toml,
}

impl StateFormat {
    /// Pick the format from a file extension
    ///
    /// # Returns
    /// * `Some(StateFormat)` - For `.json` and `.toml` files
    /// * `None` - Any other (or missing) extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => Some(StateFormat::Json),
            Some("toml") => Some(StateFormat::Toml),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            StateFormat::Json => "json",
            StateFormat::Toml => "toml",
        }
    }
}

/// Errors that can occur when loading or saving a state snapshot
#[derive(Error, Debug)]
pub enum StateFileError {
    #[error("IO error for {path}: {source}", path = .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported state file '{path}': expected a .json or .toml extension", path = .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
}

impl DocumentState {
    /// Parse a JSON snapshot (the wizard's persisted store format)
    pub fn from_json_str(content: &str) -> Result<Self, StateFileError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a TOML snapshot
    pub fn from_toml_str(content: &str) -> Result<Self, StateFileError> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to the given format
    pub fn to_string_as(&self, format: StateFormat) -> Result<String, StateFileError> {
        match format {
            StateFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            StateFormat::Toml => Ok(toml::to_string_pretty(self)?),
        }
    }

    /// Load a snapshot from disk, choosing the parser by file extension
    ///
    /// # Parameters
    /// * `path` - Path to a `.json` or `.toml` snapshot
    ///
    /// # Returns
    /// * `Ok(DocumentState)` - Successfully loaded snapshot
    /// * `Err(StateFileError)` - Unsupported extension, IO failure or parse error
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StateFileError> {
        let path = path.as_ref();
        let format = StateFormat::from_path(path)
            .ok_or_else(|| StateFileError::UnsupportedFormat(path.to_path_buf()))?;

        let content = fs::read_to_string(path).map_err(|source| StateFileError::IoError {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!("Loading document state from {}", path.display());
        match format {
            StateFormat::Json => Self::from_json_str(&content),
            StateFormat::Toml => Self::from_toml_str(&content),
        }
    }

    /// Save a snapshot to disk, choosing the encoding by file extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), StateFileError> {
        let path = path.as_ref();
        let format = StateFormat::from_path(path)
            .ok_or_else(|| StateFileError::UnsupportedFormat(path.to_path_buf()))?;

        let content = self.to_string_as(format)?;
        fs::write(path, content).map_err(|source| StateFileError::IoError {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(())
    }
}

/// Deserialize `null` as the type's default value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_has_placeholder_feature() {
        let state = DocumentState::default();

        assert!(state.project_name.is_empty());
        assert!(state.badges.is_empty());
        assert_eq!(state.features, vec![Feature::new("🚀", "")]);
        assert!(state.environment_variables.is_empty());
        assert_eq!(state.author, Author::default());
    }

    #[test]
    fn test_parse_persisted_store_json() {
        // Arrange: JSON as written by the browser store, including UI-only keys
        let json = r#"{
            "projectName": "MyApp",
            "projectDescription": "A tool.",
            "projectLogo": "",
            "projectMedia": [],
            "badges": ["mit", "react"],
            "features": [{"text": "API: Fast", "emoji": "⚡"}],
            "installation": "",
            "environmentVariables": [{"name": "API_KEY", "value": "abc", "isSecret": true}],
            "projectStructure": "",
            "author": {"name": "Jane", "link": ""},
            "currentStep": "badges",
            "lastUpdate": 1700000000000
        }"#;

        // Act
        let state = DocumentState::from_json_str(json).unwrap();

        // Assert
        assert_eq!(state.project_name, "MyApp");
        assert_eq!(state.badges, vec!["mit", "react"]);
        assert_eq!(state.features[0].text, "API: Fast");
        assert!(state.environment_variables[0].is_secret);
        assert_eq!(state.author.name, "Jane");
    }

    #[test]
    fn test_null_and_missing_fields_become_empty() {
        let json = r#"{
            "projectName": null,
            "badges": null,
            "features": null,
            "environmentVariables": [{"name": "PORT", "value": null}],
            "author": null
        }"#;

        let state = DocumentState::from_json_str(json).unwrap();

        assert_eq!(state.project_name, "");
        assert!(state.badges.is_empty());
        assert!(state.features.is_empty());
        assert_eq!(state.environment_variables[0].value, "");
        assert!(!state.environment_variables[0].is_secret);
        assert_eq!(state.author, Author::default());
        // Missing fields fall back to the session defaults
        assert_eq!(state.project_structure, "");
    }

    #[test]
    fn test_empty_object_is_default_session() {
        let state = DocumentState::from_json_str("{}").unwrap();
        assert_eq!(state, DocumentState::default());
    }

    #[test]
    fn test_toml_snapshot() {
        let toml_content = r#"
projectName = "Toolbox"
badges = ["rust"]
installation = "cargo install toolbox"

[[features]]
emoji = "🔧"
text = "Simple bullet"

[[environmentVariables]]
name = "PORT"
value = "3000"

[author]
name = "Jane"
link = "https://github.com/jane"
"#;

        let state = DocumentState::from_toml_str(toml_content).unwrap();

        assert_eq!(state.project_name, "Toolbox");
        assert_eq!(state.features, vec![Feature::new("🔧", "Simple bullet")]);
        assert_eq!(
            state.environment_variables,
            vec![EnvironmentVariable::new("PORT", "3000")]
        );
        assert_eq!(state.author.link, "https://github.com/jane");
    }

    #[test]
    fn test_save_and_load_both_formats() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = DocumentState::default();
        state.project_name = "Saved".to_string();
        state.badges.push("mit".to_string());
        state
            .environment_variables
            .push(EnvironmentVariable::secret("TOKEN", "x"));

        for name in ["state.json", "state.toml"] {
            let path = dir.path().join(name);
            state.save(&path).unwrap();
            assert_eq!(DocumentState::load(&path).unwrap(), state, "{}", name);
        }
    }

    #[test]
    fn test_unsupported_extension() {
        let result = DocumentState::load("state.yaml");
        assert!(matches!(result, Err(StateFileError::UnsupportedFormat(_))));
    }
}
