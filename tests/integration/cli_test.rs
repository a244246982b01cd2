//! Integration tests for the wplay CLI

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{fixture_path, wplay};

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let config = TempDir::new().unwrap();
    wplay(&config)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("inspect"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn play_help_shows_flags() {
    let config = TempDir::new().unwrap();
    wplay(&config)
        .args(["play", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<FILE>"))
        .stdout(predicate::str::contains("--autostart"))
        .stdout(predicate::str::contains("--gender"))
        .stdout(predicate::str::contains("--log-file"));
}

// ============================================================================
// Inspect
// ============================================================================

#[test]
fn inspect_lists_flattened_steps() {
    let config = TempDir::new().unwrap();
    wplay(&config)
        .arg("inspect")
        .arg(fixture_path("full_body.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Warm-up - Round 1 of 2"))
        .stdout(predicate::str::contains("Warm-up - Round 2 of 2"))
        .stdout(predicate::str::contains("5. Push-ups"))
        .stdout(predicate::str::contains(
            "3 exercises, 6 sets, 5 steps, about 13 min",
        ));
}

#[test]
fn inspect_json_totals() {
    let config = TempDir::new().unwrap();
    let output = wplay(&config)
        .args(["inspect", "--json"])
        .arg(fixture_path("full_body.json"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["workout_name"], "Full Body");
    assert_eq!(report["total_exercises"], 3);
    assert_eq!(report["total_sets"], 6);
    assert_eq!(report["total_steps"], 5);
    assert_eq!(report["estimated_minutes"], 13);

    let names: Vec<&str> = report["steps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["exercise"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        ["Bird Dogs", "Arm Circles", "Bird Dogs", "Arm Circles", "Push-ups"]
    );
    assert_eq!(report["steps"][2]["round"], 2);
}

#[test]
fn inspect_reads_toml() {
    let config = TempDir::new().unwrap();
    wplay(&config)
        .arg("inspect")
        .arg(fixture_path("full_body.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("5 steps"));
}

#[test]
fn inspect_empty_workout_says_nothing_to_play() {
    let config = TempDir::new().unwrap();
    wplay(&config)
        .arg("inspect")
        .arg(fixture_path("empty.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to play"));
}

// ============================================================================
// Play errors (reported before the terminal is touched)
// ============================================================================

#[test]
fn play_empty_workout_fails_cleanly() {
    let config = TempDir::new().unwrap();
    wplay(&config)
        .arg("play")
        .arg(fixture_path("empty.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to play"));
}

#[test]
fn play_invalid_workout_names_exercise() {
    let config = TempDir::new().unwrap();
    wplay(&config)
        .arg("play")
        .arg(fixture_path("invalid_sets.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Squat"))
        .stderr(predicate::str::contains("sets must be at least 1"));
}

#[test]
fn play_missing_file_fails() {
    let config = TempDir::new().unwrap();
    wplay(&config)
        .args(["play", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load workout"));
}

#[test]
fn play_rejects_unknown_format() {
    let config = TempDir::new().unwrap();
    let path = config.path().join("workout.yaml");
    std::fs::write(&path, "workoutName: x").unwrap();
    wplay(&config)
        .arg("play")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported workout format"));
}

#[test]
fn play_rejects_unknown_gender() {
    let config = TempDir::new().unwrap();
    wplay(&config)
        .arg("play")
        .arg(fixture_path("full_body.json"))
        .args(["--gender", "robot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn config_path_honors_env_override() {
    let config = TempDir::new().unwrap();
    let expected = config.path().join("config.toml");
    wplay(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.display().to_string()));
}

#[test]
fn config_show_prints_defaults() {
    let config = TempDir::new().unwrap();
    wplay(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[player]"))
        .stdout(predicate::str::contains("autostart = false"))
        .stdout(predicate::str::contains("theme = \"default\""));
}

#[test]
fn invalid_config_is_reported() {
    let config = TempDir::new().unwrap();
    std::fs::write(config.path().join("config.toml"), "[player\n").unwrap();
    wplay(&config)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}

// ============================================================================
// Completions
// ============================================================================

#[test]
fn completions_for_bash() {
    let config = TempDir::new().unwrap();
    wplay(&config)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wplay"));
}
