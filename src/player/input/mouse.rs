//! Mouse input handling for the player.
//!
//! Left clicks on the on-screen controls map to the same intents as their
//! keyboard shortcuts.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::{Focus, InputRouter, Intent, Overlay};
use crate::player::render::{Control, ControlsLayout};
use crate::player::state::{Command, Phase};

/// Handle a mouse event.
///
/// Clicks are ignored while the note field has focus or a modal is open.
pub fn route_mouse(
    router: &mut InputRouter,
    mouse: &MouseEvent,
    phase: Phase,
    controls: &ControlsLayout,
) -> Intent {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return Intent::None;
    }
    if router.focus != Focus::Player || router.overlay != Overlay::None {
        return Intent::None;
    }

    match controls.hit(mouse.column, mouse.row) {
        Some(Control::Main) if phase == Phase::Complete => Intent::CloseSummary,
        Some(Control::Main) => Intent::Session(Command::Advance),
        Some(Control::Pause) => Intent::Session(Command::TogglePause),
        Some(Control::Skip) => Intent::Session(Command::SkipExercise),
        Some(Control::Gender) => Intent::ToggleGender,
        Some(Control::Exit) => {
            router.open_exit_confirmation();
            Intent::None
        }
        None => Intent::None,
    }
}
