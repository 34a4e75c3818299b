//! Config command
//!
//! Manage feedpost configuration.

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use colored::Colorize;
use std::fs;
use std::path::Path;

use feedpost_core::config::Config;

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite without confirmation
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration file path
    Path,

    /// Validate configuration
    Validate,
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, path: &Path) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(path, json),
        ConfigCommand::Init { force } => init_config(path, force),
        ConfigCommand::Path => {
            println!("{}", path.display());
            Ok(())
        }
        ConfigCommand::Validate => validate_config(path),
    }
}

fn show_config(path: &Path, as_json: bool) -> Result<()> {
    let exists = path.exists();
    let config = Config::load_or_default(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;

    if as_json {
        let json = serde_json::to_string_pretty(&config)?;
        println!("{}", json);
        return Ok(());
    }

    println!("{}", "Configuration:".bold().underline());
    if exists {
        println!("{}", path.display().to_string().dimmed());
    } else {
        println!(
            "{}",
            format!("{} (not found, showing defaults)", path.display()).dimmed()
        );
    }
    println!();
    println!("{}", config.to_toml()?);

    Ok(())
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        use dialoguer::Confirm;

        let confirmed = Confirm::new()
            .with_prompt(format!("Overwrite {}?", path.display()))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Init cancelled.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    let content = format!("# feedpost configuration\n\n{}", Config::default().to_toml()?);
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    println!(
        "{} Configuration written to {}",
        "✓".green(),
        path.display().to_string().cyan()
    );
    Ok(())
}

fn validate_config(path: &Path) -> Result<()> {
    if !path.exists() {
        println!(
            "{} No configuration at {}, defaults apply. Run '{}' to create one.",
            "⚠".yellow(),
            path.display(),
            "feedpost config init".cyan()
        );
        return Ok(());
    }

    match Config::load(path) {
        Ok(config) => {
            println!("{} Configuration is valid", "✓".green());
            if config.view.seed().is_none() {
                println!("{} view.seed_comment is empty, threads start empty", "⚠".yellow());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", "✗".red(), e);
            bail!("Invalid configuration at {}", path.display())
        }
    }
}
