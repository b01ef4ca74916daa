//! Command-line interface definitions for readme-wizard

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for the generate command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// GitHub-flavored Markdown
    Markdown,
    /// Standalone HTML preview page
    Html,
}

/// File format for a saved document state
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum StateFileFormat {
    #[default]
    Json,
    Toml,
}

/// CLI structure for the readme-wizard application
#[derive(Parser)]
#[command(name = "readme-wizard")]
#[command(version)]
#[command(about = "Generate README.md files from a project description", long_about = None)]
pub struct Cli {
    /// Tool configuration file (defaults to ./readme-wizard.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for readme-wizard
#[derive(Subcommand)]
pub enum Commands {
    /// Write a starter document state file
    Init {
        /// State file to create (defaults to readme.json or readme.toml)
        path: Option<PathBuf>,

        /// Project name
        #[arg(short, long)]
        name: Option<String>,

        /// Project structure preset (nextjs, vite, node)
        #[arg(long, value_name = "PRESET")]
        structure: Option<String>,

        /// Environment variable preset (nextjs, node, react, firebase)
        #[arg(long, value_name = "PRESET")]
        env: Option<String>,

        /// Installation guide preset (simple, detailed)
        #[arg(long, value_name = "PRESET")]
        install: Option<String>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,

        /// State file format when no path is given
        #[arg(long, value_enum, default_value = "json")]
        format: StateFileFormat,
    },

    /// Generate a README from a document state file
    Generate {
        /// Document state file (.json or .toml)
        #[arg(value_name = "STATE")]
        input: PathBuf,

        /// Output file (defaults to a name derived from the project name)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (inferred from the output extension when omitted)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Base URL linked from the footer
        #[arg(long, value_name = "URL")]
        origin: Option<String>,

        /// Print to stdout instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Check a document state for problems
    Validate {
        /// Document state file (.json or .toml)
        #[arg(value_name = "STATE")]
        input: PathBuf,
    },

    /// List badges in the catalog
    Badges {
        /// Only badges whose id, label or category contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Only badges in this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Print the Markdown for a custom Shields.io badge
    Badge {
        /// Left-hand text
        #[arg(long)]
        label: String,

        /// Right-hand text
        #[arg(long)]
        message: String,

        /// Badge color
        #[arg(long, default_value = "blue")]
        color: String,

        /// Simple Icons logo name
        #[arg(long)]
        logo: Option<String>,

        /// Logo color
        #[arg(long, default_value = "white")]
        logo_color: String,

        /// Link target
        #[arg(long)]
        link: Option<String>,
    },
}
