//! readme-wizard - README generator for software projects
//!
//! Turns a [`DocumentState`] snapshot (project name, badges, features,
//! installation guide, environment variables, structure, author) into a
//! GitHub-flavored Markdown README. Generation is a pure function of the
//! snapshot and the badge catalog; the CLI and the HTML preview are thin
//! layers on top.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
// Allow some pedantic lints that are too strict for this project
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod app_config;
pub mod badge_catalog;
pub mod custom_badge;
pub mod document_state;
pub mod export;
pub mod features;
pub mod installation;
pub mod markdown_format;
pub mod markdown_generator;
pub mod presets;
pub mod preview;
pub mod store;
pub mod tech_stack;
pub mod validation;

pub use app_config::AppConfig;
pub use badge_catalog::{Badge, BadgeCatalog, BadgeCategory};
pub use document_state::{Author, DocumentState, EnvironmentVariable, Feature};
pub use markdown_generator::{generate, generate_markdown, GeneratorOptions};
pub use store::{apply, DocumentStore, Update};
