//! readme-wizard - README generator CLI
//!
//! Creates document state files, validates them, and renders them to
//! Markdown or an HTML preview page.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, OutputFormat, StateFileFormat};
use readme_wizard::app_config::AppConfig;
use readme_wizard::badge_catalog::{Badge, BadgeCategory};
use readme_wizard::custom_badge::CustomBadge;
use readme_wizard::document_state::{DocumentState, StateFormat};
use readme_wizard::installation::InstallationGuide;
use readme_wizard::{export, markdown_generator, presets, preview, validation};
use std::path::{Path, PathBuf};

/// Main entry point for the readme-wizard CLI application
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

/// Run the CLI application
fn run() -> Result<()> {
    let cli = Cli::parse();

    let verbose = matches!(cli.command, Commands::Generate { verbose: true, .. });
    init_logging(verbose);

    match cli.command {
        Commands::Init {
            path,
            name,
            structure,
            env,
            install,
            force,
            format,
        } => {
            handle_init_command(path, name, structure, env, install, force, format)?;
        }

        Commands::Generate {
            input,
            output,
            format,
            origin,
            stdout,
            verbose: _,
        } => {
            let config = load_config(cli.config.as_deref())?;
            handle_generate_command(&config, input, output, format, origin, stdout)?;
        }

        Commands::Validate { input } => {
            let config = load_config(cli.config.as_deref())?;
            handle_validate_command(&config, input)?;
        }

        Commands::Badges { search, category } => {
            let config = load_config(cli.config.as_deref())?;
            handle_badges_command(&config, search, category)?;
        }

        Commands::Badge {
            label,
            message,
            color,
            logo,
            logo_color,
            link,
        } => {
            handle_badge_command(label, message, color, logo, logo_color, link)?;
        }
    }

    Ok(())
}

/// Warnings by default, info with `--verbose`; `RUST_LOG` wins over both
fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    AppConfig::discover(path).with_context(|| match path {
        Some(path) => format!("Failed to load configuration from {}", path.display()),
        None => "Failed to load configuration".to_string(),
    })
}

/// Handle the init command
fn handle_init_command(
    path: Option<PathBuf>,
    name: Option<String>,
    structure: Option<String>,
    env: Option<String>,
    install: Option<String>,
    force: bool,
    format: StateFileFormat,
) -> Result<()> {
    let target_path = path.unwrap_or_else(|| {
        let format = match format {
            StateFileFormat::Json => StateFormat::Json,
            StateFileFormat::Toml => StateFormat::Toml,
        };
        PathBuf::from(format!("readme.{}", format.extension()))
    });

    if target_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it",
            target_path.display()
        );
    }

    let mut state = DocumentState::default();

    if let Some(name) = name {
        state.project_name = name;
    }

    if let Some(id) = structure {
        let preset = presets::structure_preset(&id).with_context(|| {
            format!(
                "Structure preset '{}' not found. Available: {}",
                id,
                presets::STRUCTURE_PRESETS
                    .iter()
                    .map(|p| p.id)
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })?;
        state.project_structure = preset.tree.to_string();
    }

    if let Some(id) = env {
        state.environment_variables = presets::environment_preset(&id).with_context(|| {
            format!(
                "Environment preset '{}' not found. Available: {}",
                id,
                presets::environment_preset_ids().collect::<Vec<_>>().join(", ")
            )
        })?;
    }

    if let Some(id) = install {
        let guide = InstallationGuide::preset(&id).with_context(|| {
            format!(
                "Installation preset '{}' not found. Available: {}",
                id,
                InstallationGuide::PRESETS.join(", ")
            )
        })?;
        state.installation = guide.to_markdown();
    }

    if let Some(parent) = target_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    state
        .save(&target_path)
        .with_context(|| format!("Failed to write {}", target_path.display()))?;

    println!("✓ Successfully created: {}", target_path.display());
    println!("\nNext steps:");
    println!("  1. Fill in {}", target_path.display());
    println!(
        "  2. Run 'readme-wizard generate {}' to build the README",
        target_path.display()
    );

    Ok(())
}

/// Handle the generate command
fn handle_generate_command(
    config: &AppConfig,
    input: PathBuf,
    output: Option<PathBuf>,
    format_arg: Option<OutputFormat>,
    origin: Option<String>,
    stdout: bool,
) -> Result<()> {
    let state = DocumentState::load(&input)
        .with_context(|| format!("Failed to load document state from {}", input.display()))?;
    let catalog = config
        .badge_catalog()
        .context("Failed to load badge catalog")?;

    for issue in validation::validate(&state, &catalog) {
        log::warn!("{}", issue);
    }

    let (format, output) = resolve_output(format_arg, output, &state.project_name)?;

    let markdown = markdown_generator::generate(&state, &catalog, &config.generator_options(origin));
    let content = match format {
        OutputFormat::Markdown => markdown,
        OutputFormat::Html => preview::render_html_page(&markdown, &config.preview_options()),
    };

    if stdout {
        print!("{}", content);
        return Ok(());
    }

    match format {
        OutputFormat::Markdown => export::write_markdown(&output, &content)
            .with_context(|| format!("Failed to export Markdown to {}", output.display()))?,
        OutputFormat::Html => export::write_html(&output, &content)
            .with_context(|| format!("Failed to export HTML to {}", output.display()))?,
    }
    println!("✓ Successfully wrote: {}", output.display());

    Ok(())
}

/// Pick the output format and path from the flags and the project name
fn resolve_output(
    format_arg: Option<OutputFormat>,
    output: Option<PathBuf>,
    project_name: &str,
) -> Result<(OutputFormat, PathBuf)> {
    let extension_for = |format: OutputFormat| match format {
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };

    match (format_arg, output) {
        (Some(format), Some(mut output)) => {
            if output.extension().is_none() {
                output.set_extension(extension_for(format));
            }
            Ok((format, output))
        }
        (None, Some(mut output)) => {
            if output.extension().is_none() {
                output.set_extension(extension_for(OutputFormat::Markdown));
            }

            // Auto-detect from file extension
            let format = match output.extension().and_then(|s| s.to_str()) {
                Some("md") | Some("markdown") | None => OutputFormat::Markdown,
                Some("html") | Some("htm") => OutputFormat::Html,
                Some(ext) => {
                    anyhow::bail!(
                        "Unknown output format for extension '.{}'. Supported: .md, .html\nUse --format to specify explicitly.",
                        ext
                    );
                }
            };
            Ok((format, output))
        }
        (format, None) => {
            let format = format.unwrap_or(OutputFormat::Markdown);
            let mut output = PathBuf::from(export::download_file_name(project_name));
            output.set_extension(extension_for(format));
            Ok((format, output))
        }
    }
}

/// Handle the validate command
fn handle_validate_command(config: &AppConfig, input: PathBuf) -> Result<()> {
    let state = DocumentState::load(&input)
        .with_context(|| format!("Failed to load document state from {}", input.display()))?;
    let catalog = config
        .badge_catalog()
        .context("Failed to load badge catalog")?;

    println!("Validating {}...", input.display());

    let issues = validation::validate(&state, &catalog);
    for issue in &issues {
        println!("  {}", issue);
    }

    if validation::has_errors(&issues) {
        let errors = issues
            .iter()
            .filter(|i| i.severity == validation::Severity::Error)
            .count();
        anyhow::bail!("{} error(s) found in {}", errors, input.display());
    }

    if issues.is_empty() {
        println!("✓ No problems found");
    } else {
        println!("✓ Valid with {} warning(s)", issues.len());
    }

    Ok(())
}

/// Handle the badges command
fn handle_badges_command(
    config: &AppConfig,
    search: Option<String>,
    category: Option<String>,
) -> Result<()> {
    let catalog = config
        .badge_catalog()
        .context("Failed to load badge catalog")?;

    let category = category
        .map(|c| c.parse::<BadgeCategory>().map_err(anyhow::Error::msg))
        .transpose()?;

    let mut badges: Vec<&Badge> = match &search {
        Some(query) => catalog.search(query),
        None => catalog.iter().collect(),
    };
    if let Some(category) = category {
        badges.retain(|b| b.category == category);
    }

    if badges.is_empty() {
        println!("No badges found");
        return Ok(());
    }

    println!("Available badges:\n");
    for category in BadgeCategory::ALL {
        let in_category: Vec<&&Badge> = badges.iter().filter(|b| b.category == category).collect();
        if in_category.is_empty() {
            continue;
        }

        println!("  {}", category.display_name());
        for badge in in_category {
            println!("    {:<12} {}", badge.id, badge.label);
        }
        println!();
    }

    println!("Usage: add ids to \"badges\" in your state file");

    Ok(())
}

/// Handle the badge command
fn handle_badge_command(
    label: String,
    message: String,
    color: String,
    logo: Option<String>,
    logo_color: String,
    link: Option<String>,
) -> Result<()> {
    let badge = CustomBadge {
        label,
        message,
        color,
        logo: logo.unwrap_or_default(),
        logo_color,
        link: link.unwrap_or_default(),
    };

    let markdown = badge
        .markdown()
        .context("Badge label and message must not be blank")?;
    println!("{}", markdown);

    Ok(())
}
