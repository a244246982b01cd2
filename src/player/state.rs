//! Shared player types.
//!
//! Contains the phase enum, the commands accepted by the session state
//! machine and the events the player reports back to its host.

use std::fmt;

use chrono::{DateTime, Local};
use serde::Serialize;

/// The player's current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Showing the first exercise before the session starts
    Preview,
    /// Performing a set
    Active,
    /// Resting between sets
    Rest,
    /// All steps done (terminal)
    Complete,
}

impl Phase {
    /// Whether the session has ended.
    pub fn is_terminal(self) -> bool {
        self == Phase::Complete
    }

    /// Label of the main control button in this phase.
    pub fn action_label(self) -> &'static str {
        match self {
            Phase::Preview => "Start",
            Phase::Rest => "Skip Rest",
            Phase::Active => "Next",
            Phase::Complete => "Done",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Preview => "preview",
            Phase::Active => "active",
            Phase::Rest => "rest",
            Phase::Complete => "complete",
        };
        f.write_str(name)
    }
}

/// A user-initiated command for the session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start / next set / skip rest, depending on phase
    Advance,
    /// Abandon the remaining sets of the current step
    SkipExercise,
    /// Pause or resume both timers
    TogglePause,
}

/// A command stamped with the phase its issuer was looking at.
///
/// Commands whose stamp no longer matches the session phase are stale and
/// are dropped, so a "skip rest" click that loses the race against the rest
/// countdown cannot start a second rest or skip a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stamped {
    pub command: Command,
    pub observed: Phase,
}

impl Command {
    pub fn observed_in(self, observed: Phase) -> Stamped {
        Stamped {
            command: self,
            observed,
        }
    }
}

/// Stats reported when the last step is finished.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionSummary {
    pub workout_name: String,
    pub total_elapsed_seconds: u64,
    /// Exercises across sections, section repeats not counted
    pub total_exercises: usize,
    /// Flattened steps played through
    pub total_steps: usize,
    pub finished_at: DateTime<Local>,
}

impl CompletionSummary {
    /// Plain-text report printed once the player has closed.
    pub fn report_lines(&self) -> Vec<String> {
        vec![
            format!("Workout complete: {}", self.workout_name),
            format!("Duration: {}", format_clock(self.total_elapsed_seconds)),
            format!("Exercises: {}", self.total_exercises),
            format!("Finished at {}", self.finished_at.format("%Y-%m-%d %H:%M")),
        ]
    }
}

/// Something the host must react to.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    /// The session reached `Complete`
    Completed(CompletionSummary),
    /// The user confirmed leaving the player
    ExitRequested,
}

/// Format seconds as `m:ss`.
pub fn format_clock(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
