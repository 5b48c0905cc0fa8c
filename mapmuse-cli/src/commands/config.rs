//! Configuration management CLI commands.

use std::path::Path;

use clap::Subcommand;
use mapmuse::config::{update_interval_minutes, ConfigFile};

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show the effective configuration
    Show,

    /// Show the configuration file path
    Path,
}

/// Run a config subcommand.
pub fn run(config_path: &Path, command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Init { force } => run_init(config_path, force),
        ConfigCommands::Show => run_show(config_path),
        ConfigCommands::Path => {
            println!("{}", config_path.display());
            Ok(())
        }
    }
}

fn run_init(config_path: &Path, force: bool) -> Result<(), CliError> {
    if config_path.exists() && !force {
        return Err(CliError::Config(format!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        )));
    }
    ConfigFile::default().save_to(config_path)?;
    println!("Wrote default configuration to {}", config_path.display());
    Ok(())
}

fn run_show(config_path: &Path) -> Result<(), CliError> {
    let config = ConfigFile::load_from(config_path)?;
    let wallpaper = &config.wallpaper;

    println!("Config file: {}", config_path.display());
    println!();
    println!("[wallpaper]");
    let selected = config
        .themes
        .titles
        .get(wallpaper.map_mode)
        .map(String::as_str)
        .unwrap_or("(out of range)");
    println!("map_mode = {} ({})", wallpaper.map_mode, selected);
    println!("zoom = {}", wallpaper.zoom);
    println!("invert_lightness = {}", wallpaper.invert_lightness);
    println!(
        "update_interval = {} ({} minutes)",
        wallpaper.update_interval,
        update_interval_minutes(wallpaper.update_interval)
    );
    println!();
    println!("[provider]");
    println!(
        "google_api_key = {}",
        mask(config.provider.google_api_key.as_deref())
    );
    println!(
        "mapbox_access_token = {}",
        mask(config.provider.mapbox_access_token.as_deref())
    );
    println!();
    println!("[themes]");
    println!(
        "file = {}",
        config
            .themes
            .file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none)".to_string())
    );
    println!("titles = {}", config.themes.titles.join(", "));
    Ok(())
}

/// Masks a credential for display, keeping only a short prefix.
fn mask(value: Option<&str>) -> String {
    match value {
        None => "(not set)".to_string(),
        Some(v) if v.chars().count() <= 4 => "****".to_string(),
        Some(v) => {
            let prefix: String = v.chars().take(4).collect();
            format!("{prefix}****")
        }
    }
}
