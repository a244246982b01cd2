//! Play command handler

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use workout_player::player::{play_workout, PlaybackResult};
use workout_player::workout::{load_workout, Gender};
use workout_player::Config;

/// Arguments of `wplay play` after parsing.
pub struct PlayArgs {
    pub file: PathBuf,
    pub autostart: bool,
    pub gender: Option<Gender>,
    pub json: bool,
}

/// Load the workout, run the player and print how it ended.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: PlayArgs, config: &Config) -> Result<()> {
    let workout = load(&args.file)?;
    let theme = config.theme();

    // Flags win over the config file
    let mut options = config.player_options();
    options.autostart |= args.autostart;
    if let Some(gender) = args.gender {
        options.gender = gender;
    }

    let result = play_workout(&workout, &options, &theme)
        .with_context(|| format!("Failed to play {}", args.file.display()))?;

    match result {
        PlaybackResult::Completed { summary, note } => {
            if args.json {
                let mut value = serde_json::to_value(&summary)?;
                value["note"] = serde_json::json!(note);
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                for line in summary.report_lines() {
                    println!("{}", theme.primary_text(&line));
                }
                if let Some(note) = note {
                    println!("{}", theme.secondary_text(&format!("Note: {}", note)));
                }
            }
        }
        PlaybackResult::Exited { elapsed_seconds } => {
            if args.json {
                let value = serde_json::json!({ "exited": true, "elapsed_seconds": elapsed_seconds });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{}", theme.secondary_text("Workout stopped early."));
            }
        }
    }
    Ok(())
}

fn load(path: &Path) -> Result<workout_player::workout::Workout> {
    load_workout(path).with_context(|| format!("Failed to load workout {}", path.display()))
}
