//! MapMuse CLI - command-line interface
//!
//! This binary drives the MapMuse library: run wallpaper ticks, preview
//! URLs, share the current artwork and manage configuration.

mod commands;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mapmuse::config::config_file_path;
use mapmuse::logging::{default_log_dir, default_log_file, init_logging};

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "mapmuse")]
#[command(version = mapmuse::VERSION)]
#[command(about = "Themed map wallpapers from your last known location", long_about = None)]
struct Cli {
    /// Path to the configuration file (default: ~/.mapmuse/config.ini)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one wallpaper tick and print the published artwork
    Tick(commands::tick::TickArgs),

    /// Run ticks continuously on the configured schedule
    Run(commands::run::RunArgs),

    /// Print image and viewer URLs without publishing
    Preview(commands::preview::PreviewArgs),

    /// Print the share text for the current artwork
    Share,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(config_file_path);

    // Keep the guard alive for the whole process; dropping it closes the
    // log file writer.
    let _logging = match init_logging(&default_log_dir(), default_log_file()) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: failed to initialize logging: {}", e);
            None
        }
    };

    let result = match cli.command {
        Commands::Tick(args) => commands::tick::run(&config_path, args),
        Commands::Run(args) => commands::run::run(&config_path, args),
        Commands::Preview(args) => commands::preview::run(&config_path, args),
        Commands::Share => commands::share::run(),
        Commands::Config { command } => commands::config::run(&config_path, command),
    };

    if let Err(e) = result {
        e.exit();
    }
}
