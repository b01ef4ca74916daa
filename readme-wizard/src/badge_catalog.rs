//! Badge catalog: badge identifier to display contract
//!
//! The built-in catalog is compiled into the binary from
//! `catalog/badges.toml`. Additional catalogs use the same `[[badge]]`
//! schema and can be layered on top with [`BadgeCatalog::merge`]. Every
//! catalog is validated when it is loaded, so the generator only ever sees
//! well-formed entries and treats an unknown identifier as `None`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Embedded catalog source
const BUILTIN_CATALOG: &str = include_str!("catalog/badges.toml");

/// Badge grouping used for browsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeCategory {
    Framework,
    Styling,
    Backend,
    Database,
    Language,
    Tool,
    Deployment,
    License,
    Status,
    Custom,
}

impl BadgeCategory {
    /// All categories in browsing order
    pub const ALL: [BadgeCategory; 10] = [
        BadgeCategory::Framework,
        BadgeCategory::Styling,
        BadgeCategory::Backend,
        BadgeCategory::Database,
        BadgeCategory::Language,
        BadgeCategory::Tool,
        BadgeCategory::Deployment,
        BadgeCategory::License,
        BadgeCategory::Status,
        BadgeCategory::Custom,
    ];

    /// Identifier as written in catalog files
    pub fn as_str(self) -> &'static str {
        match self {
            BadgeCategory::Framework => "framework",
            BadgeCategory::Styling => "styling",
            BadgeCategory::Backend => "backend",
            BadgeCategory::Database => "database",
            BadgeCategory::Language => "language",
            BadgeCategory::Tool => "tool",
            BadgeCategory::Deployment => "deployment",
            BadgeCategory::License => "license",
            BadgeCategory::Status => "status",
            BadgeCategory::Custom => "custom",
        }
    }

    /// Plural heading for listings
    pub fn display_name(self) -> &'static str {
        match self {
            BadgeCategory::Framework => "Frameworks",
            BadgeCategory::Styling => "Styling",
            BadgeCategory::Backend => "Backend",
            BadgeCategory::Database => "Databases",
            BadgeCategory::Language => "Languages",
            BadgeCategory::Tool => "Tools",
            BadgeCategory::Deployment => "Deployment",
            BadgeCategory::License => "License",
            BadgeCategory::Status => "Status",
            BadgeCategory::Custom => "Custom",
        }
    }
}

impl fmt::Display for BadgeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BadgeCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        BadgeCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == wanted)
            .ok_or_else(|| format!("unknown badge category '{}'", s))
    }
}

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    /// Identifier stored in `DocumentState::badges`
    pub id: String,

    /// Alt text of the badge image
    pub label: String,

    /// Image URL (Shields.io style)
    pub url: String,

    /// Click-through target; `#` for none
    pub link: String,

    pub category: BadgeCategory,

    /// Version or status text shown on the badge, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Errors that can occur when loading or extending a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error for {path}: {source}", path = .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid badge '{id}': {reason}")]
    Invalid { id: String, reason: String },

    #[error("Duplicate badge id '{0}'")]
    DuplicateId(String),
}

/// On-disk catalog shape
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    badge: Vec<Badge>,
}

/// Validated, ordered badge lookup table
#[derive(Debug, Clone, Default)]
pub struct BadgeCatalog {
    badges: Vec<Badge>,
    index: HashMap<String, usize>,
}

impl BadgeCatalog {
    /// Load the catalog compiled into the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Parse and validate a catalog from TOML text
    ///
    /// # Parameters
    /// * `content` - TOML text with a `[[badge]]` array of tables
    ///
    /// # Returns
    /// * `Ok(BadgeCatalog)` - Every entry passed validation
    /// * `Err(CatalogError)` - Parse error, invalid entry, or duplicate id
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;

        let mut catalog = BadgeCatalog::default();
        for badge in file.badge {
            validate_badge(&badge)?;
            if catalog.index.contains_key(&badge.id) {
                return Err(CatalogError::DuplicateId(badge.id));
            }
            catalog.push(badge);
        }

        Ok(catalog)
    }

    /// Load a catalog file from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogError::IoError {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_toml_str(&content)?;
        log::info!("Loaded {} badges from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Look up a badge by identifier
    pub fn resolve(&self, id: &str) -> Option<&Badge> {
        self.index.get(id).map(|&position| &self.badges[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.badges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.badges.is_empty()
    }

    /// All badges in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Badge> {
        self.badges.iter()
    }

    pub fn by_category(&self, category: BadgeCategory) -> impl Iterator<Item = &Badge> {
        self.badges.iter().filter(move |b| b.category == category)
    }

    /// Case-insensitive search over label, category and id
    ///
    /// A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&Badge> {
        let term = query.trim().to_lowercase();
        if term.is_empty() {
            return Vec::new();
        }

        self.badges
            .iter()
            .filter(|badge| {
                badge.label.to_lowercase().contains(&term)
                    || badge.category.as_str().contains(&term)
                    || badge.id.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Add or replace a badge after validating it
    ///
    /// # Returns
    /// * `Ok(Some(Badge))` - An entry with the same id was replaced in place
    /// * `Ok(None)` - The badge was appended
    /// * `Err(CatalogError)` - The badge failed validation
    pub fn insert(&mut self, badge: Badge) -> Result<Option<Badge>, CatalogError> {
        validate_badge(&badge)?;

        match self.index.get(&badge.id) {
            Some(&position) => Ok(Some(std::mem::replace(&mut self.badges[position], badge))),
            None => {
                self.push(badge);
                Ok(None)
            }
        }
    }

    /// Layer another catalog over this one; same ids are replaced in place
    pub fn merge(&mut self, other: BadgeCatalog) {
        for badge in other.badges {
            match self.index.get(&badge.id) {
                Some(&position) => {
                    log::debug!("Overriding built-in badge '{}'", badge.id);
                    self.badges[position] = badge;
                }
                None => self.push(badge),
            }
        }
    }

    fn push(&mut self, badge: Badge) {
        self.index.insert(badge.id.clone(), self.badges.len());
        self.badges.push(badge);
    }
}

/// Check the schema rules every catalog entry must satisfy
fn validate_badge(badge: &Badge) -> Result<(), CatalogError> {
    let invalid = |reason: &str| CatalogError::Invalid {
        id: badge.id.clone(),
        reason: reason.to_string(),
    };

    if badge.id.is_empty() {
        return Err(invalid("id must not be empty"));
    }
    if !badge
        .id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
    {
        return Err(invalid(
            "id must contain only lowercase letters, digits, '_' or '-'",
        ));
    }
    if badge.label.trim().is_empty() {
        return Err(invalid("label must not be empty"));
    }
    if !(badge.url.starts_with("https://") || badge.url.starts_with("http://")) {
        return Err(invalid("url must be an http(s) URL"));
    }
    if badge.link.trim().is_empty() {
        return Err(invalid("link must not be empty (use '#' for none)"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn badge(id: &str) -> Badge {
        Badge {
            id: id.to_string(),
            label: "Label".to_string(),
            url: "https://img.shields.io/badge/x-y-blue".to_string(),
            link: "#".to_string(),
            category: BadgeCategory::Custom,
            message: None,
        }
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = BadgeCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 24);
        assert!(catalog.contains("mit"));
        assert!(catalog.contains("nextjs"));
    }

    #[test]
    fn test_resolve_known_and_unknown() {
        let catalog = BadgeCatalog::builtin().unwrap();

        let mit = catalog.resolve("mit").unwrap();
        assert_eq!(mit.label, "License: MIT");
        assert_eq!(mit.url, "https://img.shields.io/badge/License-MIT-yellow.svg");
        assert_eq!(mit.link, "https://opensource.org/licenses/MIT");
        assert_eq!(mit.category, BadgeCategory::License);

        assert!(catalog.resolve("does-not-exist").is_none());
        assert!(catalog.resolve("").is_none());
    }

    #[test]
    fn test_catalog_preserves_file_order() {
        let catalog = BadgeCatalog::builtin().unwrap();
        let ids: Vec<&str> = catalog.iter().take(3).map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["nextjs", "react", "vue"]);
    }

    #[test]
    fn test_by_category() {
        let catalog = BadgeCatalog::builtin().unwrap();
        let licenses: Vec<&str> = catalog
            .by_category(BadgeCategory::License)
            .map(|b| b.id.as_str())
            .collect();
        assert_eq!(licenses, vec!["mit", "apache"]);
    }

    #[test]
    fn test_search() {
        let catalog = BadgeCatalog::builtin().unwrap();

        let react: Vec<&str> = catalog.search("REACT").iter().map(|b| b.id.as_str()).collect();
        assert_eq!(react, vec!["react"]);

        // Category names match too
        assert_eq!(catalog.search("database").len(), 2);

        assert!(catalog.search("   ").is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let toml_content = r##"
[[badge]]
id = "a"
label = "A"
url = "https://example.com/a.svg"
link = "#"
category = "tool"

[[badge]]
id = "a"
label = "A again"
url = "https://example.com/a.svg"
link = "#"
category = "tool"
"##;

        let result = BadgeCatalog::from_toml_str(toml_content);
        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == "a"));
    }

    #[test]
    fn test_invalid_entries_rejected() {
        let bad_url = r##"
[[badge]]
id = "a"
label = "A"
url = "ftp://example.com/a.svg"
link = "#"
category = "tool"
"##;
        let bad_category = r##"
[[badge]]
id = "a"
label = "A"
url = "https://example.com/a.svg"
link = "#"
category = "spaceship"
"##;
        let bad_id = r##"
[[badge]]
id = "Has Spaces"
label = "A"
url = "https://example.com/a.svg"
link = "#"
category = "tool"
"##;

        assert!(matches!(
            BadgeCatalog::from_toml_str(bad_url),
            Err(CatalogError::Invalid { .. })
        ));
        assert!(matches!(
            BadgeCatalog::from_toml_str(bad_category),
            Err(CatalogError::ParseError(_))
        ));
        assert!(matches!(
            BadgeCatalog::from_toml_str(bad_id),
            Err(CatalogError::Invalid { .. })
        ));
    }

    #[test]
    fn test_insert_and_merge() {
        let mut catalog = BadgeCatalog::builtin().unwrap();
        let original_len = catalog.len();

        assert!(catalog.insert(badge("custom_one")).unwrap().is_none());
        assert_eq!(catalog.len(), original_len + 1);

        let mut overlay = BadgeCatalog::default();
        let mut mit = badge("mit");
        mit.label = "MIT Licensed".to_string();
        overlay.insert(mit).unwrap();
        catalog.merge(overlay);

        assert_eq!(catalog.len(), original_len + 1);
        assert_eq!(catalog.resolve("mit").unwrap().label, "MIT Licensed");
    }

    #[test]
    fn test_insert_validates() {
        let mut catalog = BadgeCatalog::default();
        let mut broken = badge("x");
        broken.label = "  ".to_string();

        assert!(catalog.insert(broken).is_err());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("Framework".parse::<BadgeCategory>(), Ok(BadgeCategory::Framework));
        assert!("nope".parse::<BadgeCategory>().is_err());
    }
}
