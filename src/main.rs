//! wplay - guided workout player for the terminal

mod commands;

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use workout_player::cli::{Cli, Commands, ConfigCommands};
use workout_player::Config;

use commands::play::PlayArgs;

/// Environment variable holding the log filter (`EnvFilter` syntax).
const LOG_ENV: &str = "WPLAY_LOG";

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            file,
            autostart,
            gender,
            log_file,
            json,
        } => {
            let config = Config::load().context("Failed to load config")?;
            let log_file = log_file.or_else(|| config.player.log_file.clone());
            init_logging(log_file.as_deref())?;

            let args = PlayArgs {
                file,
                autostart,
                gender: gender.map(Into::into),
                json,
            };
            commands::play::handle(args, &config)
        }
        Commands::Inspect { file, json } => {
            let config = Config::load().context("Failed to load config")?;
            commands::inspect::handle(&file, json, &config.theme())
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Edit => commands::config::handle_edit(),
        },
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}

/// Send tracing output to `path`.
///
/// The terminal is owned by the player UI, so without a log file nothing is
/// installed and events are dropped.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "wplay starting");
    Ok(())
}
