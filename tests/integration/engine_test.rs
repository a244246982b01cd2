//! Engine behavior over a real workout with timers driven by a fake clock

use std::time::{Duration, Instant};

use workout_player::player::{Command, Phase, PlayerEvent, ViewKind};

use crate::helpers::{load_fixture, mount, simple_workout};

const SECOND: Duration = Duration::from_secs(1);

#[test]
fn full_body_played_with_timers() {
    let t0 = Instant::now();
    let mut engine = mount(&load_fixture("full_body.json"), false, t0);
    assert_eq!(engine.phase(), Phase::Preview);
    // Elapsed time runs from mount; the preview image stays on frame 0
    assert_eq!(engine.running_timers(), 1);

    let mut now = t0;
    let mut commands = 0;
    while engine.phase() != Phase::Complete {
        // Let every rest run out on its own
        if engine.phase() == Phase::Rest {
            now += 60 * SECOND;
            engine.advance_to(now);
            continue;
        }
        let phase = engine.phase();
        engine.dispatch(Command::Advance.observed_in(phase), now);
        commands += 1;
        assert!(commands < 100, "session did not terminate");
    }

    // Start + one Advance per set: 2 + 1 + 2 + 1 + 3
    assert_eq!(commands, 10);
    assert_eq!(engine.running_timers(), 0);

    let events = engine.take_events();
    let summary = match events.as_slice() {
        [PlayerEvent::Completed(summary)] => summary,
        other => panic!("unexpected events {:?}", other),
    };
    assert_eq!(summary.total_exercises, 3);
    assert_eq!(summary.total_steps, 5);
    assert_eq!(summary.workout_name, "Full Body");
    assert!(summary.total_elapsed_seconds > 0);
}

#[test]
fn rest_countdown_fires_transition_exactly_once() {
    let t0 = Instant::now();
    let mut engine = mount(&simple_workout(&[("Squat", 3, 5)]), true, t0);
    engine.dispatch(Command::Advance.observed_in(Phase::Active), t0);
    assert_eq!(engine.state().rest_seconds_left(), 5);

    for i in 1..=4 {
        engine.advance_to(t0 + i * SECOND);
        assert_eq!(engine.phase(), Phase::Rest);
        assert_eq!(engine.state().rest_seconds_left(), 5 - i);
    }
    engine.advance_to(t0 + 5 * SECOND);
    assert_eq!(engine.phase(), Phase::Active);
    assert_eq!(engine.state().current_set(), 2);
    assert_eq!(engine.state().rest_seconds_left(), 0);

    engine.advance_to(t0 + 30 * SECOND);
    assert_eq!(engine.state().current_set(), 2);
}

#[test]
fn zero_second_rest_finishes_on_first_tick() {
    let t0 = Instant::now();
    let mut engine = mount(&simple_workout(&[("Squat", 2, 0)]), true, t0);
    engine.dispatch(Command::Advance.observed_in(Phase::Active), t0);
    assert_eq!(engine.phase(), Phase::Rest);

    engine.advance_to(t0 + SECOND);
    assert_eq!(engine.phase(), Phase::Active);
    assert_eq!(engine.state().current_set(), 2);
}

#[test]
fn skip_rest_click_loses_race_with_countdown() {
    let t0 = Instant::now();
    let mut engine = mount(&simple_workout(&[("Squat", 3, 2)]), true, t0);
    engine.dispatch(Command::Advance.observed_in(Phase::Active), t0);
    let seen = engine.phase();

    engine.advance_to(t0 + 2 * SECOND);
    let stale = engine.dispatch(Command::Advance.observed_in(seen), t0 + 2 * SECOND);

    assert!(stale.is_none());
    assert_eq!(engine.phase(), Phase::Active);
    assert_eq!(engine.state().current_set(), 2);
}

#[test]
fn pause_holds_elapsed_and_rest() {
    let t0 = Instant::now();
    let mut engine = mount(&simple_workout(&[("Squat", 2, 10)]), true, t0);
    engine.dispatch(Command::Advance.observed_in(Phase::Active), t0);
    engine.advance_to(t0 + 3 * SECOND);
    engine.dispatch(Command::TogglePause.observed_in(Phase::Rest), t0 + 3 * SECOND);

    let before = engine.state().clone();
    engine.advance_to(t0 + 600 * SECOND);
    assert_eq!(engine.state(), &before);
    assert!(engine.state().is_paused());
}

#[test]
fn pause_during_set_holds_elapsed_until_a_full_second_after_resume() {
    let t0 = Instant::now();
    let mut engine = mount(&simple_workout(&[("Squat", 3, 30)]), true, t0);
    assert_eq!(engine.phase(), Phase::Active);

    let paused_at = t0 + Duration::from_millis(2500);
    engine.advance_to(paused_at);
    assert_eq!(engine.state().total_elapsed_seconds(), 2);
    engine.dispatch(Command::TogglePause.observed_in(Phase::Active), paused_at);
    assert!(engine.state().is_paused());

    let resumed_at = paused_at + 100 * SECOND;
    engine.advance_to(resumed_at);
    assert_eq!(engine.state().total_elapsed_seconds(), 2);
    assert_eq!(engine.phase(), Phase::Active);
    assert_eq!(engine.state().current_set(), 1);

    engine.dispatch(Command::TogglePause.observed_in(Phase::Active), resumed_at);
    assert!(!engine.state().is_paused());
    engine.advance_to(resumed_at + Duration::from_millis(999));
    assert_eq!(engine.state().total_elapsed_seconds(), 2);
    engine.advance_to(resumed_at + SECOND);
    assert_eq!(engine.state().total_elapsed_seconds(), 3);
}

#[test]
fn skip_exercise_moves_on_and_switches_view() {
    let t0 = Instant::now();
    let mut engine = mount(&simple_workout(&[("Squat", 4, 30), ("Lunge", 2, 30)]), true, t0);
    engine.dispatch(Command::Advance.observed_in(Phase::Active), t0);
    assert_eq!(engine.view_kind(), ViewKind::Rest);

    engine.dispatch(Command::SkipExercise.observed_in(Phase::Rest), t0);
    assert_eq!(engine.view_kind(), ViewKind::Exercise);
    assert_eq!(engine.current_step().name(), "Lunge");
    assert_eq!(engine.state().current_set(), 1);
}

#[test]
fn unmount_leaves_nothing_running() {
    let t0 = Instant::now();
    let mut engine = mount(&simple_workout(&[("Squat", 3, 30)]), true, t0);
    engine.dispatch(Command::Advance.observed_in(Phase::Active), t0);
    assert_eq!(engine.running_timers(), 3);

    let state = engine.unmount();
    assert_eq!(state.phase(), Phase::Rest);
}
