//! On-screen controls and their click targets.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::player::state::Phase;
use crate::theme::Theme;

/// A clickable control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Pause,
    /// Start / Next / Skip Rest / Done
    Main,
    Skip,
    Gender,
    Exit,
}

/// Where each control was drawn, for mouse hit testing.
///
/// The default layout is all zero-sized rects, so nothing is hit before the
/// first render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlsLayout {
    pub pause: Rect,
    pub main: Rect,
    pub skip: Rect,
    pub gender: Rect,
    pub exit: Rect,
}

impl ControlsLayout {
    /// Split the controls area: an icon row on top, the buttons below.
    pub fn split(area: Rect) -> Self {
        let [icons, buttons] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(area);
        let [skip, gender, exit] = Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .areas(icons);
        let [pause, _, main] = Layout::horizontal([
            Constraint::Length(8),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(buttons);

        Self {
            pause,
            main,
            skip,
            gender,
            exit,
        }
    }

    /// Control under the given cell, if any.
    pub fn hit(&self, column: u16, row: u16) -> Option<Control> {
        [
            (Control::Main, self.main),
            (Control::Pause, self.pause),
            (Control::Skip, self.skip),
            (Control::Gender, self.gender),
            (Control::Exit, self.exit),
        ]
        .into_iter()
        .find(|(_, rect)| contains(*rect, column, row))
        .map(|(control, _)| control)
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

pub fn render_controls(
    frame: &mut Frame,
    layout: &ControlsLayout,
    phase: Phase,
    paused: bool,
    theme: &Theme,
) {
    let icon = |text: &str, area: Rect, frame: &mut Frame| {
        let widget = Paragraph::new(Line::from(Span::styled(
            text.to_string(),
            theme.text_secondary_style(),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(widget, area);
    };

    let session_live = !phase.is_terminal();
    if session_live {
        icon("⏭ skip", layout.skip, frame);
    }
    icon("⚥ variant", layout.gender, frame);
    icon("✕ exit", layout.exit, frame);

    if session_live {
        let label = if paused { "▶" } else { "⏸" };
        let pause = Paragraph::new(label)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.text_secondary)),
            );
        frame.render_widget(pause, layout.pause);
    }

    let main = Paragraph::new(Span::styled(
        phase.action_label(),
        theme.accent_style().add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent)),
    );
    frame.render_widget(main, layout.main);
}
