//! Keyboard input handling for the player.
//!
//! Handles the playback shortcuts, the help overlay, the exit confirmation
//! and the session note text field.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Focus, InputRouter, Intent, Overlay};
use crate::player::state::{Command, Phase};

/// Handle a keyboard event.
///
/// While the note field has focus every key edits the note and no shortcut
/// fires. While the exit confirmation is open, only its answers are read.
pub fn route_key(router: &mut InputRouter, key: &KeyEvent, phase: Phase) -> Intent {
    if router.focus == Focus::NoteField {
        edit_note(router, key);
        return Intent::None;
    }

    match router.overlay {
        Overlay::ConfirmExit => return answer_exit_confirmation(router, key),
        Overlay::Help => {
            // Any key closes help
            router.close_overlay();
            return Intent::None;
        }
        Overlay::None => {}
    }

    match key.code {
        // === Exit (always confirmed) ===
        KeyCode::Esc | KeyCode::Char('q') => {
            router.open_exit_confirmation();
            Intent::None
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            router.open_exit_confirmation();
            Intent::None
        }

        // === Session controls ===
        KeyCode::Enter if phase == Phase::Complete => Intent::CloseSummary,
        KeyCode::Right | KeyCode::Char('n') | KeyCode::Enter => Intent::Session(Command::Advance),
        KeyCode::Char(' ') | KeyCode::Char('k') => Intent::Session(Command::TogglePause),
        KeyCode::Char('s') => Intent::Session(Command::SkipExercise),

        // === View ===
        KeyCode::Char('g') => Intent::ToggleGender,
        KeyCode::Char('?') => {
            router.toggle_help();
            Intent::None
        }
        KeyCode::Char('e') if phase != Phase::Complete => {
            router.focus_note();
            Intent::None
        }

        _ => Intent::None,
    }
}

fn answer_exit_confirmation(router: &mut InputRouter, key: &KeyEvent) -> Intent {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            router.close_overlay();
            Intent::ExitConfirmed
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            router.close_overlay();
            Intent::None
        }
        _ => Intent::None,
    }
}

fn edit_note(router: &mut InputRouter, key: &KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => router.blur_note(),
        KeyCode::Backspace => router.pop_note_char(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            router.push_note_char(c)
        }
        _ => {}
    }
}
