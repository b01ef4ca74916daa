//! README generation from a document state snapshot
//!
//! [`generate`] is a pure function of its inputs: the same state, catalog and
//! options always produce byte-identical Markdown. Sections are written in a
//! fixed order; a section whose input is empty is either left out entirely
//! (heading included) or replaced by a placeholder line:
//!
//! | Section | When empty |
//! | --- | --- |
//! | Logo | omitted |
//! | Title | `# Your Project Name` |
//! | Badges | omitted (also when no badge resolves) |
//! | Description | omitted |
//! | Features | placeholder bullet |
//! | Tech stack | omitted |
//! | Getting started | placeholder line |
//! | Environment variables | omitted |
//! | Project structure | omitted |
//! | Attribution | omitted |
//! | Footer | always written |
//!
//! Blocks are separated by one blank line and the document ends with a
//! single newline.

use crate::badge_catalog::{BadgeCatalog, CatalogError};
use crate::document_state::{Author, DocumentState, EnvironmentVariable};
use crate::features::render_features;
use crate::markdown_format::{badge_link, escape_html, fenced_block, non_blank, single_line};
use crate::tech_stack::infer_tech_stack;
use itertools::Itertools;

pub const DEFAULT_TITLE: &str = "Your Project Name";
pub const DEFAULT_FEATURES_HEADING: &str = "## ✨ Core Features";
pub const DEFAULT_FEATURE_PLACEHOLDER: &str = "- Add your first feature";
pub const DEFAULT_INSTALLATION_PLACEHOLDER: &str = "Add installation instructions here.";

const TECH_STACK_HEADING: &str = "## 🛠️ Tech Stack";
const INSTALLATION_HEADING: &str = "## 🚀 Getting Started";
const ENVIRONMENT_HEADING: &str = "## ⚙️ Environment Variables";
const STRUCTURE_HEADING: &str = "## 📁 Project Structure";
const SECRET_NOTE: &str = "> **Note:** Secret values are shown as placeholders. Replace them with your own values.";
const SHIELDS_CREDIT: &str = "*Badges powered by [Shields.io](https://shields.io)*";
const TOOL_NAME: &str = "readme-wizard";

/// Tunables for a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Base URL of the tool, linked from the footer; `#` when absent
    pub origin: Option<String>,
    pub features_heading: String,
    pub feature_placeholder: String,
    pub installation_placeholder: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            origin: None,
            features_heading: DEFAULT_FEATURES_HEADING.to_string(),
            feature_placeholder: DEFAULT_FEATURE_PLACEHOLDER.to_string(),
            installation_placeholder: DEFAULT_INSTALLATION_PLACEHOLDER.to_string(),
        }
    }
}

/// Generate the README Markdown for a snapshot
///
/// # Parameters
/// * `state` - The document snapshot; never modified
/// * `catalog` - Badge lookup; unknown badge ids are skipped
/// * `options` - Headings, placeholders and footer origin
///
/// # Returns
/// The complete Markdown document, ending in a single newline
pub fn generate(
    state: &DocumentState,
    catalog: &BadgeCatalog,
    options: &GeneratorOptions,
) -> String {
    let mut output = String::new();
    let title = title_text(&state.project_name);

    write_logo(&mut output, &state.project_logo, &title);
    push_block(&mut output, &format!("# {}", title));
    let badge_count = write_badges(&mut output, &state.badges, catalog);
    if let Some(description) = non_blank(&state.project_description) {
        push_block(&mut output, description);
    }
    write_features(&mut output, state, options);
    write_tech_stack(&mut output, &state.badges);
    write_installation(&mut output, &state.installation, options);
    write_environment(&mut output, &state.environment_variables);
    write_structure(&mut output, &state.project_structure);
    write_author(&mut output, &state.author);
    write_footer(&mut output, badge_count > 0, options.origin.as_deref());

    let trimmed_len = output.trim_end_matches('\n').len();
    output.truncate(trimmed_len);
    output.push('\n');
    output
}

/// Generate with the built-in catalog and default options
pub fn generate_markdown(state: &DocumentState) -> Result<String, CatalogError> {
    let catalog = BadgeCatalog::builtin()?;
    Ok(generate(state, &catalog, &GeneratorOptions::default()))
}

/// Project name on one line, or the fallback title
fn title_text(project_name: &str) -> String {
    let name = single_line(project_name);
    if name.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        name
    }
}

/// Append a block followed by a blank line
fn push_block(output: &mut String, block: &str) {
    output.push_str(block);
    output.push_str("\n\n");
}

fn write_logo(output: &mut String, logo: &str, title: &str) {
    let logo = logo.trim();
    if logo.is_empty() {
        return;
    }

    push_block(
        output,
        &format!(
            "<div align=\"center\">\n  <img src=\"{}\" alt=\"{} logo\" width=\"120\" />\n</div>",
            escape_html(logo),
            escape_html(title)
        ),
    );
}

/// Write the centered badge row
///
/// # Returns
/// Number of badges written; zero means the block was left out
fn write_badges(output: &mut String, badges: &[String], catalog: &BadgeCatalog) -> usize {
    let resolved: Vec<String> = badges
        .iter()
        .filter_map(|id| match catalog.resolve(id) {
            Some(badge) => Some(badge_link(&badge.label, &badge.url, &badge.link)),
            None => {
                log::debug!("Skipping unknown badge '{}'", id);
                None
            }
        })
        .collect();

    if resolved.is_empty() {
        return 0;
    }

    push_block(
        output,
        &format!("<div align=\"center\">\n\n{}\n\n</div>", resolved.iter().join(" ")),
    );
    resolved.len()
}

fn write_features(output: &mut String, state: &DocumentState, options: &GeneratorOptions) {
    push_block(output, &options.features_heading);
    push_block(
        output,
        &render_features(&state.features, &options.feature_placeholder),
    );
}

fn write_tech_stack(output: &mut String, badges: &[String]) {
    let stack = infer_tech_stack(badges);
    if stack.is_empty() {
        return;
    }

    push_block(output, TECH_STACK_HEADING);
    push_block(output, &stack.iter().map(|line| format!("- {}", line)).join("\n"));
}

fn write_installation(output: &mut String, installation: &str, options: &GeneratorOptions) {
    push_block(output, INSTALLATION_HEADING);
    match non_blank(installation) {
        Some(text) => push_block(output, text),
        None => push_block(output, &options.installation_placeholder),
    }
}

fn write_environment(output: &mut String, variables: &[EnvironmentVariable]) {
    let named: Vec<&EnvironmentVariable> = variables
        .iter()
        .filter(|variable| {
            let keep = !variable.name.trim().is_empty();
            if !keep {
                log::debug!("Skipping environment variable with blank name");
            }
            keep
        })
        .collect();

    if named.is_empty() {
        return;
    }

    let lines = named.iter().map(|variable| environment_line(variable)).join("\n");

    push_block(output, ENVIRONMENT_HEADING);
    push_block(output, &fenced_block("bash", &lines));
    if named.iter().any(|variable| variable.is_secret) {
        push_block(output, SECRET_NOTE);
    }
}

/// `NAME=value`, with secrets replaced by `your_name_here`
fn environment_line(variable: &EnvironmentVariable) -> String {
    let name = single_line(&variable.name);
    if variable.is_secret {
        format!("{}=your_{}_here", name, name.to_lowercase())
    } else {
        format!("{}={}", name, single_line(&variable.value))
    }
}

fn write_structure(output: &mut String, structure: &str) {
    let Some(tree) = non_blank(structure) else {
        return;
    };

    push_block(output, STRUCTURE_HEADING);
    push_block(output, &fenced_block("", tree));
}

fn write_author(output: &mut String, author: &Author) {
    let name = single_line(&author.name);
    if name.is_empty() {
        return;
    }

    let link = author.link.trim();
    let credit = if link.is_empty() {
        escape_html(&name)
    } else {
        format!("<a href=\"{}\">{}</a>", escape_html(link), escape_html(&name))
    };

    push_block(output, "---");
    push_block(
        output,
        &format!("<p align=\"center\">Made with ❤️ by {}</p>", credit),
    );
}

fn write_footer(output: &mut String, has_badges: bool, origin: Option<&str>) {
    let origin = origin.map(str::trim).filter(|o| !o.is_empty()).unwrap_or("#");

    push_block(output, "---");
    if has_badges {
        push_block(output, SHIELDS_CREDIT);
    }
    push_block(
        output,
        &format!("*README generated with [{}]({})*", TOOL_NAME, origin),
    );
}
