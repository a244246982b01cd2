//! Flattens a workout tree into the ordered list of playable steps.

use crate::workout::{Workout, WorkoutExercise};

/// One occurrence of an exercise within a specific section round.
///
/// The player advances through steps; a step is done when all of its sets
/// are completed (or it is skipped).
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub exercise: WorkoutExercise,
    /// Name of the section this occurrence belongs to
    pub section_name: String,
    /// How many times the section is played in full
    pub section_rounds: u32,
    /// Which round of the section this is (1-based)
    pub section_round: u32,
}

impl Step {
    /// Number of sets, never less than one.
    pub fn sets(&self) -> u32 {
        self.exercise.sets.max(1)
    }

    pub fn reps(&self) -> u32 {
        self.exercise.reps
    }

    pub fn rest_seconds(&self) -> u32 {
        self.exercise.rest_seconds
    }

    pub fn name(&self) -> &str {
        &self.exercise.exercise_name
    }

    pub fn slug(&self) -> Option<&str> {
        self.exercise.exercise_slug.as_deref()
    }

    /// "Warm-up - Round 2 of 3", only for repeated sections.
    pub fn round_label(&self) -> Option<String> {
        if self.section_rounds > 1 && !self.section_name.is_empty() {
            Some(format!(
                "{} - Round {} of {}",
                self.section_name, self.section_round, self.section_rounds
            ))
        } else {
            None
        }
    }
}

/// Flatten a workout into playable steps.
///
/// Sections are played in order; each section's exercise list is repeated
/// `rounds()` times before moving on. An empty workout gives an empty list.
pub fn flatten(workout: &Workout) -> Vec<Step> {
    let capacity = workout
        .sections
        .iter()
        .map(|s| s.rounds() as usize * s.exercises.len())
        .sum();
    let mut steps = Vec::with_capacity(capacity);

    for section in &workout.sections {
        let rounds = section.rounds();
        for round in 0..rounds {
            for exercise in &section.exercises {
                steps.push(Step {
                    exercise: exercise.clone(),
                    section_name: section.name.clone(),
                    section_rounds: rounds,
                    section_round: round + 1,
                });
            }
        }
    }

    steps
}
