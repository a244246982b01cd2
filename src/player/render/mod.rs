//! Rendering components for the player.
//!
//! The screen is split top to bottom into the header (progress bar, step
//! counter, clock), the exercise or rest view, the control buttons and a
//! footer with key hints. Modals are drawn last on top.

mod controls;
mod exercise;
mod header;
mod modal;
mod rest;

pub use controls::{render_controls, Control, ControlsLayout};
pub use exercise::{frame_dots, render_exercise_view, sets_reps_rest};
pub use header::{build_progress_bar, render_header};
pub use modal::{render_confirm_exit, render_help, render_summary};
pub use rest::render_rest_view;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::player::engine::{PlayerEngine, ViewKind};
use crate::player::input::{Focus, InputRouter, Overlay};
use crate::theme::Theme;

/// Draw the whole player and return where the buttons ended up.
pub fn render_player(
    frame: &mut Frame,
    engine: &PlayerEngine,
    router: &InputRouter,
    theme: &Theme,
) -> ControlsLayout {
    let area = frame.area();
    let [header, body, controls, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(6),
        Constraint::Length(4),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header, engine, theme);

    match engine.view_kind() {
        ViewKind::Rest => render_rest_view(frame, body, engine, theme),
        ViewKind::Exercise | ViewKind::Summary => render_exercise_view(frame, body, engine, theme),
    }

    let layout = ControlsLayout::split(controls);
    render_controls(frame, &layout, engine.phase(), engine.state().is_paused(), theme);
    render_footer(frame, footer, router, theme);

    if engine.view_kind() == ViewKind::Summary {
        render_summary(frame, area, engine, theme);
    }
    match router.overlay() {
        Overlay::Help => render_help(frame, area, theme),
        Overlay::ConfirmExit => render_confirm_exit(frame, area, theme),
        Overlay::None => {}
    }

    layout
}

/// Key hints, or the note being edited.
fn render_footer(frame: &mut Frame, area: Rect, router: &InputRouter, theme: &Theme) {
    let line = if router.focus() == Focus::NoteField {
        Line::from(vec![
            Span::styled("note: ", theme.accent_style()),
            Span::styled(format!("{}▏", router.note()), theme.text_style()),
            Span::styled("  (enter to save)", theme.text_secondary_style()),
        ])
    } else {
        Line::from(build_footer_spans(
            &[
                ("→", "next"),
                ("space", "pause"),
                ("s", "skip"),
                ("g", "variant"),
                ("e", "note"),
                ("?", "help"),
                ("esc", "exit"),
            ],
            theme,
        ))
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// Build styled spans for footer keybinding hints.
///
/// Keys use the accent color, descriptions the secondary color, and entries
/// are separated by " | ".
fn build_footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", theme.text_secondary_style()));
        }
        spans.push(Span::styled(key.to_string(), theme.accent_style()));
        spans.push(Span::styled(
            format!(": {}", desc),
            theme.text_secondary_style(),
        ));
    }
    spans
}

/// Cut `text` to at most `max_width` display columns, ending in `…` if cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}
