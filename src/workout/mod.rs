//! Workout data model.
//!
//! A workout is a tree: ordered sections, each holding ordered exercises with
//! set/rep/rest parameters. The player only reads it; this module also carries
//! the file loader used by the `wplay` binary and a few aggregate helpers.

pub mod frames;

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use frames::{frame_layout, FrameLayout, Orientation, DEFAULT_LAYOUT};

/// Seconds budgeted per rep when estimating workout duration.
const SECONDS_PER_REP: u64 = 3;
/// Transition time added per section when estimating workout duration.
const SECTION_TRANSITION_SECONDS: u64 = 60;

/// Errors raised while loading a workout file.
#[derive(Debug, thiserror::Error)]
pub enum WorkoutError {
    #[error("Failed to read workout file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid workout JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid workout TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported workout format '{extension}' (expected .json or .toml)")]
    UnsupportedFormat { extension: String },

    #[error("Invalid exercise '{exercise}': {reason}")]
    Invalid { exercise: String, reason: String },
}

/// Workout difficulty as shown in the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Which image variant to show for an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// The other variant.
    pub fn toggled(self) -> Self {
        match self {
            Gender::Male => Gender::Female,
            Gender::Female => Gender::Male,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A saved workout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    #[serde(default)]
    pub id: String,
    pub workout_name: String,
    #[serde(default)]
    pub workout_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub sections: Vec<Section>,
    /// Denormalised aggregates, computed by the workout builder.
    #[serde(default)]
    pub target_muscles: Vec<String>,
    #[serde(default)]
    pub required_equipment: Vec<String>,
    #[serde(default)]
    pub estimated_duration: u32,
}

/// An ordered group of exercises, optionally repeated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub exercises: Vec<WorkoutExercise>,
    /// Number of times to play the whole section (default 1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
}

impl Section {
    /// Repeat count with the default applied. Zero is treated as one.
    pub fn rounds(&self) -> u32 {
        self.sets.unwrap_or(1).max(1)
    }
}

/// One exercise placed in a workout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExercise {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub exercise_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_slug: Option<String>,
    pub exercise_name: String,
    pub sets: u32,
    pub reps: u32,
    #[serde(default)]
    pub rest_seconds: u32,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        rename = "animation_frames",
        skip_serializing_if = "Option::is_none"
    )]
    pub animation_frames: Option<u8>,
    #[serde(
        default,
        rename = "animation_orientation",
        skip_serializing_if = "Option::is_none"
    )]
    pub animation_orientation: Option<Orientation>,
}

impl WorkoutExercise {
    /// Notes if present, otherwise the description.
    pub fn display_notes(&self) -> Option<&str> {
        if !self.notes.trim().is_empty() {
            return Some(self.notes.trim());
        }
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }

    /// Number of sprite frames to cycle for this exercise.
    ///
    /// Explicit metadata wins, then the known layout table. Exercises without
    /// a slug have no image and therefore a single frame.
    pub fn frame_count(&self) -> u8 {
        match (&self.exercise_slug, self.animation_frames) {
            (None, _) => 1,
            (Some(_), Some(frames)) => frames.clamp(1, 3),
            (Some(slug), None) => frame_layout(slug).frames,
        }
    }

    fn validate(&self) -> Result<(), WorkoutError> {
        let invalid = |reason: &str| WorkoutError::Invalid {
            exercise: self.exercise_name.clone(),
            reason: reason.to_string(),
        };
        if self.sets == 0 {
            return Err(invalid("sets must be at least 1"));
        }
        if self.reps == 0 {
            return Err(invalid("reps must be at least 1"));
        }
        if let Some(frames) = self.animation_frames {
            if !(1..=3).contains(&frames) {
                return Err(invalid("animation_frames must be between 1 and 3"));
            }
        }
        Ok(())
    }
}

impl Workout {
    /// Number of exercises across all sections (section repeats not counted).
    pub fn total_exercises(&self) -> usize {
        self.sections.iter().map(|s| s.exercises.len()).sum()
    }

    /// Sum of the `sets` of every exercise, section repeats not counted.
    pub fn total_sets(&self) -> u32 {
        self.sections
            .iter()
            .flat_map(|s| s.exercises.iter())
            .map(|e| e.sets)
            .sum()
    }

    /// Estimated duration in whole minutes, rounded up.
    ///
    /// Section repeats are included, unlike the denormalised
    /// `estimated_duration` field written by the builder.
    pub fn estimated_minutes(&self) -> u64 {
        let mut total_seconds = 0u64;
        for section in &self.sections {
            let rounds = section.rounds() as u64;
            for exercise in &section.exercises {
                let sets = exercise.sets as u64;
                let work = sets * exercise.reps as u64 * SECONDS_PER_REP;
                let rest = sets * exercise.rest_seconds as u64;
                total_seconds += rounds * (work + rest);
            }
            total_seconds += SECTION_TRANSITION_SECONDS;
        }
        total_seconds.div_ceil(60)
    }

    /// Reject exercises the player cannot step through.
    pub fn validate(&self) -> Result<(), WorkoutError> {
        self.sections
            .iter()
            .flat_map(|s| s.exercises.iter())
            .try_for_each(WorkoutExercise::validate)
    }
}

/// Load and validate a workout from a `.json` or `.toml` file.
pub fn load_workout(path: impl AsRef<Path>) -> Result<Workout, WorkoutError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let content = fs::read_to_string(path)?;
    let workout = parse_workout(&content, &extension)?;
    workout.validate()?;

    tracing::debug!(
        path = %path.display(),
        sections = workout.sections.len(),
        exercises = workout.total_exercises(),
        "Workout loaded"
    );
    Ok(workout)
}

/// Parse workout text in the format named by `extension`.
pub fn parse_workout(content: &str, extension: &str) -> Result<Workout, WorkoutError> {
    match extension {
        "json" => Ok(serde_json::from_str(content)?),
        "toml" => Ok(toml::from_str(content)?),
        other => Err(WorkoutError::UnsupportedFormat {
            extension: other.to_string(),
        }),
    }
}
