//! Exercise view, shown in Preview and Active.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::truncate_to_width;
use crate::player::animator::FrameAnimator;
use crate::player::engine::PlayerEngine;
use crate::player::sequencer::Step;
use crate::player::state::Phase;
use crate::theme::Theme;

/// "3 sets • 12 reps • 45s rest"
pub fn sets_reps_rest(step: &Step) -> String {
    format!(
        "{} sets • {} reps • {}s rest",
        step.sets(),
        step.reps(),
        step.rest_seconds()
    )
}

/// One dot per frame, the current one filled: `○●○`.
pub fn frame_dots(frame: u8, frames: u8) -> String {
    (0..frames)
        .map(|i| if i == frame { '●' } else { '○' })
        .collect()
}

pub fn render_exercise_view(frame: &mut Frame, area: Rect, engine: &PlayerEngine, theme: &Theme) {
    let step = engine.current_step();
    let state = engine.state();
    let inner_width = area.width.saturating_sub(2) as usize;

    let mut lines: Vec<Line> = Vec::new();
    if let Some(label) = step.round_label() {
        lines.push(Line::from(Span::styled(
            truncate_to_width(&label, inner_width),
            theme.text_secondary_style(),
        )));
    } else if !step.section_name.is_empty() {
        lines.push(Line::from(Span::styled(
            truncate_to_width(&step.section_name, inner_width),
            theme.text_secondary_style(),
        )));
    }

    lines.push(Line::from(Span::styled(
        truncate_to_width(step.name(), inner_width),
        theme.text_style().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    match engine.phase() {
        Phase::Active => {
            lines.push(Line::from(Span::styled(
                format!("Set {} of {}", state.current_set(), step.sets()),
                theme.accent_style(),
            )));
            lines.push(Line::from(vec![
                Span::styled(step.reps().to_string(), theme.work_style()),
                Span::styled(" reps", theme.text_secondary_style()),
            ]));
        }
        _ => {
            lines.push(Line::from(Span::styled(
                sets_reps_rest(step),
                theme.text_style(),
            )));
        }
    }

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

    if let Some(notes) = step.exercise.display_notes() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            notes.to_string(),
            theme.text_secondary_style(),
        )));
    }

    let view = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.text_secondary)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(view, area);
}

/// Image placeholder: the key the image resolver would look up, and dots.
pub(super) fn image_lines(animator: &FrameAnimator, theme: &Theme) -> Vec<Line<'static>> {
    let Some(key) = animator.image_key() else {
        return Vec::new();
    };
    vec![
        Line::from(Span::styled(
            format!("[{} · {}]", key.slug, key.gender),
            theme.text_secondary_style(),
        )),
        Line::from(Span::styled(
            frame_dots(key.frame, animator.frames()),
            theme.accent_style(),
        )),
    ]
}
