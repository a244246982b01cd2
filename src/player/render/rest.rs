//! Rest view with the countdown.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::exercise::image_lines;
use super::truncate_to_width;
use crate::player::engine::PlayerEngine;
use crate::player::state::format_clock;
use crate::theme::Theme;

pub fn render_rest_view(frame: &mut Frame, area: Rect, engine: &PlayerEngine, theme: &Theme) {
    let step = engine.current_step();
    let state = engine.state();
    let inner_width = area.width.saturating_sub(2) as usize;

    let mut lines: Vec<Line> = Vec::new();
    if let Some(label) = step.round_label() {
        lines.push(Line::from(Span::styled(
            truncate_to_width(&label, inner_width),
            theme.text_secondary_style(),
        )));
    }
    lines.extend([
        Line::from(Span::styled(
            "Rest before next set",
            theme.text_secondary_style(),
        )),
        Line::from(Span::styled(
            format_clock(u64::from(state.rest_seconds_left())),
            theme.rest_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Up next: ", theme.text_secondary_style()),
            Span::styled(
                truncate_to_width(step.name(), inner_width.saturating_sub(9)),
                theme.text_style().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("Set {} of {}", state.current_set() + 1, step.sets()),
            theme.accent_style(),
        )),
    ]);

    if state.is_paused() {
        lines.push(Line::from(Span::styled(
            "PAUSED",
            theme.error_style().add_modifier(Modifier::BOLD),
        )));
    }

    if let Some(animator) = engine.animator() {
        lines.push(Line::from(""));
        lines.extend(image_lines(animator, theme));
    }

    let view = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.rest)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(view, area);
}
