//! Lint checks for a document state
//!
//! Generation never fails; these checks only report what would be dropped
//! or looks wrong so the user can fix it.

use crate::badge_catalog::BadgeCatalog;
use crate::document_state::DocumentState;
use crate::features::split_category;
use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

/// Longest accepted environment variable name
pub const MAX_ENV_NAME_LEN: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub severity: Severity,
    pub message: String,
}

impl Issue {
    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Uppercase letters, digits and underscores, not starting with a digit
static ENV_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z_][A-Z0-9_]*$").unwrap());

/// Check a state against the catalog and naming rules
pub fn validate(state: &DocumentState, catalog: &BadgeCatalog) -> Vec<Issue> {
    let mut issues = Vec::new();

    for id in &state.badges {
        if !catalog.contains(id) {
            issues.push(Issue::warning(format!(
                "badge '{}' is not in the catalog and will be skipped",
                id
            )));
        }
    }

    for feature in &state.features {
        let text = feature.text.trim();
        if text.contains(':') && split_category(text).is_none() && !text.contains("://") {
            issues.push(Issue::warning(format!(
                "feature '{}' has an empty category or detail and will be listed without a category",
                text
            )));
        }
    }

    let mut seen = HashSet::new();
    for (index, variable) in state.environment_variables.iter().enumerate() {
        let name = variable.name.trim();
        if name.is_empty() {
            issues.push(Issue::error(format!(
                "environment variable #{} has no name",
                index + 1
            )));
            continue;
        }
        if !ENV_NAME_RE.is_match(name) {
            issues.push(Issue::error(format!(
                "environment variable '{}' must be uppercase letters, digits and underscores",
                name
            )));
        }
        if name.chars().count() > MAX_ENV_NAME_LEN {
            issues.push(Issue::error(format!(
                "environment variable '{}' is longer than {} characters",
                name, MAX_ENV_NAME_LEN
            )));
        }
        if !seen.insert(name) {
            issues.push(Issue::error(format!(
                "environment variable '{}' is defined more than once",
                name
            )));
        }
    }

    issues
}

/// True when any issue is an error
pub fn has_errors(issues: &[Issue]) -> bool {
    issues.iter().any(|issue| issue.severity == Severity::Error)
}
