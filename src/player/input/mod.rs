//! Input routing for the player.
//!
//! Maps keyboard and mouse events onto intents. The router is the only
//! source of user-initiated session commands; it also owns the UI-only state
//! that decides how a key is interpreted (text field focus, open overlay).

mod keyboard;
mod mouse;

pub use keyboard::route_key;
pub use mouse::route_mouse;

use crossterm::event::{Event, KeyEventKind};

use crate::player::render::ControlsLayout;
use crate::player::state::{Command, Phase};

/// Longest session note accepted from the text field.
pub const MAX_NOTE_LEN: usize = 200;

/// What the host loop should do with an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Nothing for the engine (the router may have changed its own state)
    None,
    /// Forward to the session state machine
    Session(Command),
    /// Switch the image variant
    ToggleGender,
    /// The user confirmed leaving the player
    ExitConfirmed,
    /// Dismiss the completion summary
    CloseSummary,
}

/// Where keyboard input goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Player,
    /// Editing the session note; shortcuts are disabled
    NoteField,
}

/// Modal drawn on top of the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    Help,
    ConfirmExit,
}

/// Routes input events to intents.
#[derive(Debug, Clone, Default)]
pub struct InputRouter {
    focus: Focus,
    overlay: Overlay,
    note: String,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    /// Free-text note typed during the session.
    pub fn note(&self) -> &str {
        &self.note
    }

    /// Route any terminal event.
    ///
    /// # Arguments
    /// * `event` - The crossterm event
    /// * `phase` - Phase currently on screen
    /// * `controls` - Button positions from the last render, for clicks
    pub fn route(&mut self, event: &Event, phase: Phase, controls: &ControlsLayout) -> Intent {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => route_key(self, key, phase),
            Event::Mouse(mouse) => route_mouse(self, mouse, phase, controls),
            _ => Intent::None, // Resize is picked up by the next draw
        }
    }

    fn open_exit_confirmation(&mut self) {
        self.overlay = Overlay::ConfirmExit;
    }

    fn close_overlay(&mut self) {
        self.overlay = Overlay::None;
    }

    fn toggle_help(&mut self) {
        self.overlay = match self.overlay {
            Overlay::Help => Overlay::None,
            _ => Overlay::Help,
        };
    }

    fn focus_note(&mut self) {
        self.focus = Focus::NoteField;
    }

    fn blur_note(&mut self) {
        self.focus = Focus::Player;
        self.note = self.note.trim().to_string();
    }

    fn push_note_char(&mut self, c: char) {
        if self.note.chars().count() < MAX_NOTE_LEN {
            self.note.push(c);
        }
    }

    fn pop_note_char(&mut self) {
        self.note.pop();
    }
}
