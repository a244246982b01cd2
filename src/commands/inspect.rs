//! Inspect command handler

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use workout_player::player::sequencer::{flatten, Step};
use workout_player::theme::Theme;
use workout_player::workout::{load_workout, Workout};

#[derive(Serialize)]
struct InspectReport<'a> {
    workout_name: &'a str,
    total_exercises: usize,
    total_sets: u32,
    total_steps: usize,
    estimated_minutes: u64,
    steps: Vec<StepRow<'a>>,
}

#[derive(Serialize)]
struct StepRow<'a> {
    index: usize,
    section: &'a str,
    round: u32,
    rounds: u32,
    exercise: &'a str,
    sets: u32,
    reps: u32,
    rest_seconds: u32,
}

impl<'a> InspectReport<'a> {
    fn new(workout: &'a Workout, steps: &'a [Step]) -> Self {
        Self {
            workout_name: &workout.workout_name,
            total_exercises: workout.total_exercises(),
            total_sets: workout.total_sets(),
            total_steps: steps.len(),
            estimated_minutes: workout.estimated_minutes(),
            steps: steps
                .iter()
                .enumerate()
                .map(|(index, step)| StepRow {
                    index: index + 1,
                    section: &step.section_name,
                    round: step.section_round,
                    rounds: step.section_rounds,
                    exercise: step.name(),
                    sets: step.sets(),
                    reps: step.reps(),
                    rest_seconds: step.rest_seconds(),
                })
                .collect(),
        }
    }
}

/// Print the flattened step list and totals.
pub fn handle(file: &Path, json: bool, theme: &Theme) -> Result<()> {
    let workout = load_workout(file)
        .with_context(|| format!("Failed to load workout {}", file.display()))?;
    let steps = flatten(&workout);
    let report = InspectReport::new(&workout, &steps);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", theme.accent_text(&workout.workout_name));
    if steps.is_empty() {
        println!("{}", theme.secondary_text("No exercises - nothing to play."));
        return Ok(());
    }

    let mut section = None;
    for (row, step) in report.steps.iter().zip(&steps) {
        let heading = step
            .round_label()
            .unwrap_or_else(|| step.section_name.clone());
        if section.as_ref() != Some(&heading) {
            println!();
            println!("{}", theme.primary_text(&heading));
            section = Some(heading);
        }
        println!(
            "  {:>3}. {}  {}",
            row.index,
            row.exercise,
            theme.secondary_text(&format!(
                "{} × {} reps, {}s rest",
                row.sets, row.reps, row.rest_seconds
            ))
        );
    }

    println!();
    println!(
        "{}",
        theme.primary_text(&format!(
            "{} exercises, {} sets, {} steps, about {} min",
            report.total_exercises, report.total_sets, report.total_steps, report.estimated_minutes
        ))
    );
    Ok(())
}
