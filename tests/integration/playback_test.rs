//! Player loop driven by scripted terminal events on a test backend

use std::time::Instant;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::TestBackend, Terminal};

use workout_player::player::{
    run_player, PlaybackResult, PlayerEngine, PlayerError, PlayerOptions, ScriptedEvents,
};
use workout_player::theme::Theme;
use workout_player::workout::Workout;

use crate::helpers::{load_fixture, simple_workout};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Left click; on an 80x24 screen the buttons sit on rows 20-22 and the
/// icons (skip, variant, exit) on row 19.
fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn play(workout: &Workout, script: Vec<Event>) -> Result<PlaybackResult, PlayerError> {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let mut engine =
        PlayerEngine::mount(workout, &PlayerOptions::default(), Instant::now()).unwrap();
    run_player(
        &mut terminal,
        &mut engine,
        &Theme::default(),
        &mut ScriptedEvents::new(script),
    )
}

#[test]
fn clicking_main_button_plays_to_the_end() {
    let script = vec![
        click(40, 21), // Start
        click(40, 21), // Next: last set, complete
        click(40, 21), // Done
    ];
    let result = play(&simple_workout(&[("Squat", 1, 0)]), script).unwrap();
    assert!(matches!(result, PlaybackResult::Completed { .. }));
}

#[test]
fn skip_icon_and_keys_finish_fixture() {
    // Start, then skip each of the five steps
    let mut script = vec![key(KeyCode::Char('n'))];
    script.extend((0..5).map(|_| click(2, 19)));
    script.push(key(KeyCode::Enter));

    match play(&load_fixture("full_body.json"), script).unwrap() {
        PlaybackResult::Completed { summary, .. } => {
            assert_eq!(summary.total_steps, 5);
            assert_eq!(summary.total_exercises, 3);
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn exit_icon_needs_confirmation() {
    let script = vec![click(78, 19), key(KeyCode::Char('y'))];
    let result = play(&load_fixture("full_body.json"), script).unwrap();
    assert!(matches!(result, PlaybackResult::Exited { .. }));
}

#[test]
fn pause_button_and_variant_icon_do_not_end_session() {
    let script = vec![
        key(KeyCode::Char('n')),
        click(3, 21),  // pause
        click(40, 19), // variant
        click(3, 21),  // resume
        key(KeyCode::Char('q')),
        key(KeyCode::Char('y')),
    ];
    let result = play(&simple_workout(&[("Squat", 2, 30)]), script).unwrap();
    assert!(matches!(result, PlaybackResult::Exited { .. }));
}

#[test]
fn help_overlay_swallows_next_key() {
    let script = vec![
        key(KeyCode::Char('?')),
        key(KeyCode::Char('n')), // closes help only
        key(KeyCode::Char('n')), // start
        key(KeyCode::Char('n')), // last set, complete
        key(KeyCode::Enter),
    ];
    let result = play(&simple_workout(&[("Squat", 1, 0)]), script).unwrap();
    assert!(matches!(result, PlaybackResult::Completed { .. }));
}
