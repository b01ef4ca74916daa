//! Feature categorization
//!
//! A feature written as `Category: detail` is grouped under a `### Category`
//! sub-heading; everything else is a flat bullet listed after all groups.
//! Groups keep the order in which their category first appears.

use crate::document_state::Feature;

/// One rendered bullet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureItem<'a> {
    pub emoji: &'a str,
    pub text: &'a str,
}

impl FeatureItem<'_> {
    pub fn to_markdown(&self) -> String {
        if self.emoji.is_empty() {
            format!("- {}", self.text)
        } else {
            format!("- {} {}", self.emoji, self.text)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureGroup<'a> {
    pub category: &'a str,
    pub items: Vec<FeatureItem<'a>>,
}

/// Features split into categorized groups and a trailing flat list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureGroups<'a> {
    pub categorized: Vec<FeatureGroup<'a>>,
    pub uncategorized: Vec<FeatureItem<'a>>,
}

impl FeatureGroups<'_> {
    pub fn is_empty(&self) -> bool {
        self.categorized.is_empty() && self.uncategorized.is_empty()
    }
}

/// Split `Category: detail` text
///
/// # Returns
/// * `Some((category, detail))` - Both sides are non-blank
/// * `None` - No colon, a blank side, or a URL scheme (`https://...`)
pub fn split_category(text: &str) -> Option<(&str, &str)> {
    let (category, remainder) = text.split_once(':')?;
    if remainder.starts_with("//") {
        return None;
    }

    let category = category.trim();
    let remainder = remainder.trim();
    if category.is_empty() || remainder.is_empty() {
        return None;
    }

    Some((category, remainder))
}

/// Group features, skipping entries with blank text
pub fn group_features(features: &[Feature]) -> FeatureGroups<'_> {
    let mut groups = FeatureGroups::default();

    for feature in features {
        let text = feature.text.trim();
        if text.is_empty() {
            continue;
        }
        let emoji = feature.emoji.trim();

        match split_category(text) {
            Some((category, detail)) => {
                let item = FeatureItem {
                    emoji,
                    text: detail,
                };
                match groups
                    .categorized
                    .iter_mut()
                    .find(|group| group.category == category)
                {
                    Some(group) => group.items.push(item),
                    None => groups.categorized.push(FeatureGroup {
                        category,
                        items: vec![item],
                    }),
                }
            }
            None => groups.uncategorized.push(FeatureItem { emoji, text }),
        }
    }

    groups
}

/// Empty HTML comment that ends a Markdown list
const LIST_BREAK: &str = "<!-- -->";

/// Render the body of the features section (without its heading)
///
/// Falls back to the single `placeholder` line when nothing has text.
pub fn render_features(features: &[Feature], placeholder: &str) -> String {
    let groups = group_features(features);
    if groups.is_empty() {
        return placeholder.to_string();
    }

    let mut blocks: Vec<String> = groups
        .categorized
        .iter()
        .map(|group| format!("### {}\n\n{}", group.category, bullet_list(&group.items)))
        .collect();

    if !groups.uncategorized.is_empty() {
        // Without a breaker the flat bullets would join the last group's list
        if !blocks.is_empty() {
            blocks.push(LIST_BREAK.to_string());
        }
        blocks.push(bullet_list(&groups.uncategorized));
    }

    blocks.join("\n\n")
}

fn bullet_list(items: &[FeatureItem<'_>]) -> String {
    items
        .iter()
        .map(FeatureItem::to_markdown)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLACEHOLDER: &str = "- Add your first feature";

    #[test]
    fn test_split_category() {
        assert_eq!(split_category("API: Fast responses"), Some(("API", "Fast responses")));
        assert_eq!(split_category("a:b:c"), Some(("a", "b:c")));
        assert_eq!(split_category("Simple bullet"), None);
        assert_eq!(split_category("API:"), None);
        assert_eq!(split_category("API:   "), None);
        assert_eq!(split_category(": detail"), None);
        assert_eq!(split_category("Docs at https://example.com"), None);
    }

    #[test]
    fn test_categorized_then_flat() {
        // Arrange
        let features = vec![
            Feature::new("🚀", "API: Fast responses"),
            Feature::new("🔧", "Simple bullet"),
        ];

        // Act
        let body = render_features(&features, PLACEHOLDER);

        // Assert
        assert_eq!(
            body,
            "### API\n\n- 🚀 Fast responses\n\n<!-- -->\n\n- 🔧 Simple bullet"
        );
    }

    #[test]
    fn test_flat_list_renders_as_its_own_list() {
        // Arrange
        let features = vec![
            Feature::new("🚀", "API: Fast responses"),
            Feature::new("🔧", "Simple bullet"),
        ];

        // Act
        let body = render_features(&features, PLACEHOLDER);
        let html = crate::preview::render_html_fragment(&body, true);

        // Assert
        assert_eq!(html.matches("<ul>").count(), 2);
        let api_list = html.find("<li>🚀 Fast responses</li>").unwrap();
        let flat_list = html.find("<li>🔧 Simple bullet</li>").unwrap();
        assert!(html[api_list..flat_list].contains("</ul>"));
    }

    #[test]
    fn test_flat_list_alone_has_no_breaker() {
        let features = vec![Feature::new("🔧", "One"), Feature::new("🔧", "Two")];
        assert_eq!(render_features(&features, PLACEHOLDER), "- 🔧 One\n- 🔧 Two");
    }

    #[test]
    fn test_groups_keep_first_appearance_order() {
        let features = vec![
            Feature::new("1", "UI: Dark mode"),
            Feature::new("2", "plain"),
            Feature::new("3", "API: REST"),
            Feature::new("4", "UI: Responsive"),
        ];

        let groups = group_features(&features);

        let categories: Vec<&str> = groups.categorized.iter().map(|g| g.category).collect();
        assert_eq!(categories, vec!["UI", "API"]);
        assert_eq!(groups.categorized[0].items.len(), 2);
        assert_eq!(groups.categorized[0].items[1].text, "Responsive");
        assert_eq!(groups.uncategorized, vec![FeatureItem { emoji: "2", text: "plain" }]);
    }

    #[test]
    fn test_empty_remainder_falls_back_to_flat_list() {
        let features = vec![Feature::new("✨", "Security:")];
        assert_eq!(render_features(&features, PLACEHOLDER), "- ✨ Security:");
    }

    #[test]
    fn test_placeholder_when_all_blank() {
        let features = vec![Feature::new("🚀", ""), Feature::new("✨", "   ")];
        assert_eq!(render_features(&features, PLACEHOLDER), PLACEHOLDER);
        assert_eq!(render_features(&[], PLACEHOLDER), PLACEHOLDER);
    }

    #[test]
    fn test_blank_emoji_has_no_double_space() {
        let features = vec![Feature::new("", "No emoji")];
        assert_eq!(render_features(&features, PLACEHOLDER), "- No emoji");
    }
}
