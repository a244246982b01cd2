//! Flattening real workout files into steps

use workout_player::player::sequencer::flatten;

use crate::helpers::load_fixture;

#[test]
fn json_fixture_flattens_in_section_round_exercise_order() {
    let steps = flatten(&load_fixture("full_body.json"));

    let order: Vec<(&str, &str, u32)> = steps
        .iter()
        .map(|s| (s.section_name.as_str(), s.name(), s.section_round))
        .collect();
    assert_eq!(
        order,
        [
            ("Warm-up", "Bird Dogs", 1),
            ("Warm-up", "Arm Circles", 1),
            ("Warm-up", "Bird Dogs", 2),
            ("Warm-up", "Arm Circles", 2),
            ("Main", "Push-ups", 1),
        ]
    );
}

#[test]
fn toml_fixture_matches_json_fixture() {
    let from_json = flatten(&load_fixture("full_body.json"));
    let from_toml = flatten(&load_fixture("full_body.toml"));

    let names = |steps: &[workout_player::player::sequencer::Step]| {
        steps
            .iter()
            .map(|s| (s.name().to_string(), s.sets(), s.reps(), s.rest_seconds()))
            .collect::<Vec<_>>()
    };
    assert_eq!(names(&from_json), names(&from_toml));
}

#[test]
fn round_labels_only_on_repeated_section() {
    let steps = flatten(&load_fixture("full_body.json"));
    assert_eq!(
        steps[2].round_label().as_deref(),
        Some("Warm-up - Round 2 of 2")
    );
    assert_eq!(steps[4].round_label(), None);
}

#[test]
fn frame_counts_come_from_metadata_or_table() {
    let steps = flatten(&load_fixture("full_body.json"));
    // No slug: no image, single frame
    assert_eq!(steps[1].exercise.frame_count(), 1);
    // Explicit animation_frames
    assert_eq!(steps[4].exercise.frame_count(), 3);
}

#[test]
fn empty_fixture_has_no_steps() {
    assert!(flatten(&load_fixture("empty.json")).is_empty());
}
