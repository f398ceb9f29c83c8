//! Command-line interface.

pub mod completions;
pub mod config_files;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::config::Settings;
use crate::error::Result;

/// Brok - sync per-device aliases and secrets from Doppler.
#[derive(Parser)]
#[command(
    name = "brok",
    about = "Sync per-device aliases and secrets from Doppler into shell files",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file [default: <config dir>/brok/config.toml]
    #[arg(long, global = true, env = "BROK_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Write the latest aliases and secrets for this machine
    #[command(visible_aliases = ["cfg", "config"])]
    ConfigFiles(config_files::Args),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub async fn execute(command: Command, settings_path: Option<PathBuf>) -> Result<()> {
    match command {
        Command::ConfigFiles(args) => {
            let settings = match settings_path.or_else(Settings::default_path) {
                Some(path) => Settings::load(&path)?,
                None => Settings::default(),
            };
            config_files::execute(args, &settings).await
        }
        Command::Completions { shell } => completions::execute(shell),
    }
}
