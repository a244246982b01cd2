//! Shared helpers for integration tests

use std::path::{Path, PathBuf};
use std::time::Instant;

use assert_cmd::Command;
use tempfile::TempDir;

use workout_player::player::{PlayerEngine, PlayerOptions};
use workout_player::workout::{load_workout, Section, Workout, WorkoutExercise};

/// Directory holding the workout fixtures.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Load and validate a workout fixture.
pub fn load_fixture(name: &str) -> Workout {
    load_workout(fixture_path(name)).expect("fixture should load")
}

/// A one-section workout from `(name, sets, rest_seconds)` triples, 10 reps each.
pub fn simple_workout(exercises: &[(&str, u32, u32)]) -> Workout {
    Workout {
        workout_name: "Simple".to_string(),
        sections: vec![Section {
            name: "Main".to_string(),
            exercises: exercises
                .iter()
                .map(|(name, sets, rest)| WorkoutExercise {
                    exercise_name: name.to_string(),
                    exercise_slug: Some(name.to_lowercase()),
                    sets: *sets,
                    reps: 10,
                    rest_seconds: *rest,
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }],
        ..Default::default()
    }
}

/// Mount an engine at `t0`.
pub fn mount(workout: &Workout, autostart: bool, t0: Instant) -> PlayerEngine {
    let options = PlayerOptions {
        autostart,
        ..Default::default()
    };
    PlayerEngine::mount(workout, &options, t0).expect("workout should mount")
}

/// `wplay` with colors off and the config pointed into `config_dir`.
pub fn wplay(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("wplay").expect("binary should build");
    cmd.env("NO_COLOR", "1")
        .env("WPLAY_CONFIG", config_dir.path().join("config.toml"));
    cmd
}
