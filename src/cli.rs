//! Command-line definitions for `wplay`.
//!
//! Kept in the library so `xtask` can generate the man page from the same
//! definitions the binary parses.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::workout::Gender;

#[derive(Parser, Debug)]
#[command(
    name = "wplay",
    author,
    version,
    about = "Guided workout player for the terminal",
    long_about = "Plays a workout file set by set: shows the exercise, counts rests \
                  down and tracks elapsed time until every exercise is done."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a workout in the terminal
    #[command(long_about = "Play a workout in the terminal.\n\n\
        Keys: → / n / Enter start, finish a set or skip a rest; Space pauses; \
        s skips the exercise; g switches the image variant; ? shows help; \
        Esc asks before leaving.")]
    Play {
        /// Workout file (.json or .toml)
        file: PathBuf,

        /// Start the first set immediately instead of showing the preview
        #[arg(short, long)]
        autostart: bool,

        /// Image variant to start with
        #[arg(short, long, value_enum)]
        gender: Option<GenderArg>,

        /// Write a debug log to this file
        #[arg(long, value_name = "PATH")]
        log_file: Option<PathBuf>,

        /// Print the completion summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the flattened step list and totals of a workout
    Inspect {
        /// Workout file (.json or .toml)
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Open the config file in $EDITOR
    Edit,
}

/// `--gender` values.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}
