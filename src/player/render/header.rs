//! Header: workout title, step counter, elapsed clock and progress bar.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::truncate_to_width;
use crate::player::engine::PlayerEngine;
use crate::player::state::format_clock;
use crate::theme::Theme;

/// Build the progress bar characters.
///
/// # Arguments
/// * `bar_width` - Width of the bar in characters
/// * `percent` - Progress, clamped to 100
///
/// # Returns
/// A tuple of (bar_chars, filled_count).
pub fn build_progress_bar(bar_width: usize, percent: u8) -> (Vec<char>, usize) {
    let percent = percent.min(100) as usize;
    let filled = bar_width * percent / 100;

    let mut bar: Vec<char> = vec!['─'; bar_width];
    for c in bar.iter_mut().take(filled) {
        *c = '━';
    }
    (bar, filled)
}

/// Render the two header rows.
pub fn render_header(frame: &mut Frame, area: Rect, engine: &PlayerEngine, theme: &Theme) {
    let [title_row, bar_row] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    let state = engine.state();
    let clock = format_clock(state.total_elapsed_seconds());
    let counter = format!(
        "{} of {}",
        state.current_step_index() + 1,
        engine.session().total_steps()
    );

    // Title gets whatever the counter and clock leave over
    let reserved = counter.len() + clock.len() + 6;
    let title_width = (title_row.width as usize).saturating_sub(reserved);
    let title = truncate_to_width(engine.workout_name(), title_width);

    let used = title.chars().count() + 3 + counter.len();
    let pad = (title_row.width as usize).saturating_sub(used + clock.len() + 1);

    let line = Line::from(vec![
        Span::styled(title, theme.accent_bold_style()),
        Span::styled(" | ", theme.text_secondary_style()),
        Span::styled(counter, theme.text_style()),
        Span::raw(" ".repeat(pad)),
        Span::styled(clock, theme.text_style()),
    ]);
    frame.render_widget(Paragraph::new(line), title_row);

    let percent = engine.session().progress_percent();
    let label = format!(" {:>3}%", percent);
    let bar_width = (bar_row.width as usize).saturating_sub(label.len());
    let (bar, filled) = build_progress_bar(bar_width, percent);

    let done: String = bar[..filled].iter().collect();
    let rest: String = bar[filled..].iter().collect();
    let line = Line::from(vec![
        Span::styled(done, theme.work_style()),
        Span::styled(rest, theme.text_secondary_style()),
        Span::styled(label, theme.text_secondary_style()),
    ]);
    frame.render_widget(Paragraph::new(line), bar_row);
}
