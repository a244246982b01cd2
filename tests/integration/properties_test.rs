//! Property tests for session termination, progress and frame bounds

use std::time::{Duration, Instant};

use proptest::prelude::*;

use workout_player::player::animator::{ExerciseIdentity, FrameAnimator};
use workout_player::player::sequencer::flatten;
use workout_player::player::{Command, Phase, PlayerEngine, PlayerOptions, Session};
use workout_player::workout::{Gender, Section, Workout, WorkoutExercise};

/// Sections of `(sets, rest_seconds)` exercises with a repeat count.
fn workout_strategy() -> impl Strategy<Value = Workout> {
    let exercise = (1u32..=4, 0u32..=3);
    let section = (prop::collection::vec(exercise, 1..=3), 1u32..=3);
    prop::collection::vec(section, 1..=3).prop_map(|sections| Workout {
        workout_name: "Generated".to_string(),
        sections: sections
            .into_iter()
            .enumerate()
            .map(|(i, (exercises, rounds))| Section {
                name: format!("S{}", i + 1),
                sets: Some(rounds),
                exercises: exercises
                    .into_iter()
                    .enumerate()
                    .map(|(j, (sets, rest))| WorkoutExercise {
                        exercise_name: format!("E{}.{}", i + 1, j + 1),
                        sets,
                        reps: 5,
                        rest_seconds: rest,
                        ..Default::default()
                    })
                    .collect(),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    })
}

#[derive(Debug, Clone, Copy)]
enum Action {
    Advance,
    Skip,
    TogglePause,
    RestTick,
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => Just(Action::Advance),
        1 => Just(Action::Skip),
        1 => Just(Action::TogglePause),
        3 => Just(Action::RestTick),
    ]
}

fn expected_steps_sets(workout: &Workout) -> Vec<u32> {
    flatten(workout).iter().map(|s| s.sets()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Skipping every rest by hand takes sum(2 * sets - 1) advances.
    #[test]
    fn prop_manual_advance_terminates(workout in workout_strategy()) {
        let expected: u32 = expected_steps_sets(&workout).iter().map(|s| 2 * s - 1).sum();
        let mut session = Session::new(flatten(&workout), true).unwrap();

        let mut count = 0;
        while session.phase() != Phase::Complete {
            let phase = session.phase();
            prop_assert!(session.apply(Command::Advance.observed_in(phase)).is_some());
            count += 1;
            prop_assert!(count <= expected);
        }
        prop_assert_eq!(count, expected);
    }

    /// Letting every rest expire takes exactly sum(sets) advances.
    #[test]
    fn prop_timer_rests_terminate(workout in workout_strategy()) {
        let expected: u32 = expected_steps_sets(&workout).iter().sum();
        let t0 = Instant::now();
        let options = PlayerOptions { autostart: true, ..Default::default() };
        let mut engine = PlayerEngine::mount(&workout, &options, t0).unwrap();

        let mut now = t0;
        let mut count = 0;
        while engine.phase() != Phase::Complete {
            if engine.phase() == Phase::Rest {
                now += Duration::from_secs(5);
                engine.advance_to(now);
                continue;
            }
            engine.dispatch(Command::Advance.observed_in(Phase::Active), now);
            count += 1;
            prop_assert!(count <= expected);
        }
        prop_assert_eq!(count, expected);
        prop_assert_eq!(engine.running_timers(), 0);
    }

    /// Progress never goes backwards and ends at 100.
    #[test]
    fn prop_progress_is_monotonic(
        workout in workout_strategy(),
        actions in prop::collection::vec(action_strategy(), 0..200),
    ) {
        let mut session = Session::new(flatten(&workout), false).unwrap();
        let mut last = session.progress_percent();
        prop_assert_eq!(last, 0);

        let apply = |session: &mut Session, action: Action| {
            let phase = session.phase();
            match action {
                Action::Advance => { session.apply(Command::Advance.observed_in(phase)); }
                Action::Skip => { session.apply(Command::SkipExercise.observed_in(phase)); }
                Action::TogglePause => { session.apply(Command::TogglePause.observed_in(phase)); }
                Action::RestTick => { session.tick_rest(); }
            }
        };

        for action in actions {
            apply(&mut session, action);
            let progress = session.progress_percent();
            prop_assert!(progress >= last, "progress fell from {} to {}", last, progress);
            prop_assert!(progress <= 100);
            last = progress;
        }

        // Drive to the end and check the final value
        let mut guard = 0;
        while session.phase() != Phase::Complete {
            if session.state().is_paused() {
                apply(&mut session, Action::TogglePause);
            }
            apply(&mut session, Action::Advance);
            let progress = session.progress_percent();
            prop_assert!(progress >= last);
            last = progress;
            guard += 1;
            prop_assert!(guard < 1000);
        }
        prop_assert_eq!(session.progress_percent(), 100);
    }

    /// Random command streams never break the state bounds.
    #[test]
    fn prop_state_stays_in_bounds(
        workout in workout_strategy(),
        actions in prop::collection::vec(action_strategy(), 0..200),
    ) {
        let mut session = Session::new(flatten(&workout), false).unwrap();
        for action in actions {
            let phase = session.phase();
            match action {
                Action::Advance => { session.apply(Command::Advance.observed_in(phase)); }
                Action::Skip => { session.apply(Command::SkipExercise.observed_in(phase)); }
                Action::TogglePause => { session.apply(Command::TogglePause.observed_in(phase)); }
                Action::RestTick => { session.tick_rest(); }
            }

            let state = session.state();
            let step = session.current_step();
            prop_assert!(state.current_step_index() < session.total_steps());
            prop_assert!(state.current_set() >= 1);
            prop_assert!(state.current_set() <= step.sets());
            if state.phase() == Phase::Rest {
                prop_assert!(state.rest_seconds_left() <= step.rest_seconds());
            } else {
                prop_assert_eq!(state.rest_seconds_left(), 0);
            }
        }
    }

    /// The frame index always stays below the frame count.
    #[test]
    fn prop_frame_within_bounds(frames in 0u8..=6, fires in 0u32..50) {
        let t0 = Instant::now();
        let identity = ExerciseIdentity {
            step_index: 0,
            slug: Some("bird-dogs".to_string()),
            gender: Gender::Male,
        };
        let interval = Duration::from_millis(100);
        let mut animator = FrameAnimator::new(identity, frames, interval);
        animator.set_playing(true, t0);

        prop_assert!((1..=3).contains(&animator.frames()));
        for i in 1..=fires {
            animator.fire(t0 + interval * i);
            prop_assert!(animator.frame() < animator.frames());
        }
    }
}
