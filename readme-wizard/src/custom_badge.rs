//! Custom Shields.io badge builder
//!
//! Builds the image URL and Markdown for a badge that is not in the catalog.
//! A custom badge only reaches a README if the caller inserts it into a
//! [`BadgeCatalog`](crate::badge_catalog::BadgeCatalog) and selects its id.

use crate::badge_catalog::{Badge, BadgeCategory};
use crate::markdown_format::badge_link;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left alone by JavaScript's `encodeURIComponent`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const SHIELDS_BASE: &str = "https://img.shields.io/badge";

/// Inputs for a static Shields.io badge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomBadge {
    pub label: String,
    pub message: String,
    pub color: String,
    /// Simple Icons slug, empty for none
    pub logo: String,
    pub logo_color: String,
    /// Click-through target, empty for none
    pub link: String,
}

impl Default for CustomBadge {
    fn default() -> Self {
        Self {
            label: String::new(),
            message: String::new(),
            color: "blue".to_string(),
            logo: String::new(),
            logo_color: "white".to_string(),
            link: String::new(),
        }
    }
}

impl CustomBadge {
    pub fn new(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            message: message.into(),
            ..Self::default()
        }
    }

    /// Image URL, or `None` while label or message is blank
    pub fn url(&self) -> Option<String> {
        if self.label.trim().is_empty() || self.message.trim().is_empty() {
            return None;
        }

        let mut url = format!(
            "{}/{}-{}-{}",
            SHIELDS_BASE,
            encode_segment(&self.label),
            encode_segment(&self.message),
            utf8_percent_encode(&self.color, COMPONENT)
        );

        if !self.logo.is_empty() {
            url.push_str(&format!("?logo={}", utf8_percent_encode(&self.logo, COMPONENT)));
            if !self.logo_color.is_empty() && self.logo_color != "white" {
                url.push_str(&format!(
                    "&logoColor={}",
                    utf8_percent_encode(&self.logo_color, COMPONENT)
                ));
            }
        }

        Some(url)
    }

    fn link_or_placeholder(&self) -> &str {
        if self.link.trim().is_empty() {
            "#"
        } else {
            &self.link
        }
    }

    /// `[![label message](url)](link)`, or `None` while incomplete
    pub fn markdown(&self) -> Option<String> {
        let url = self.url()?;
        Some(badge_link(
            &format!("{} {}", self.label, self.message),
            &url,
            self.link_or_placeholder(),
        ))
    }

    /// Convert into a catalog entry under the given id
    pub fn into_badge(self, id: impl Into<String>) -> Option<Badge> {
        let url = self.url()?;
        let link = self.link_or_placeholder().to_string();
        Some(Badge {
            id: id.into(),
            label: self.label,
            url,
            link,
            category: BadgeCategory::Custom,
            message: Some(self.message),
        })
    }
}

/// Encode a label/message path segment
///
/// Shields reads `-` as the field separator and `_` as a space, so literal
/// ones are doubled before percent-encoding.
fn encode_segment(text: &str) -> String {
    let escaped = text.replace('-', "--").replace('_', "__");
    utf8_percent_encode(&escaped, COMPONENT).to_string()
}
