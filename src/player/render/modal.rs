//! Modals drawn over the player: help, exit confirmation, completion.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::player::engine::PlayerEngine;
use crate::player::state::format_clock;
use crate::theme::Theme;

/// Fixed-size modal centered in `area`, shrunk to fit.
fn modal_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

pub fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let modal_area = modal_rect(50, 16, area);
    frame.render_widget(Clear, modal_area);

    let help = Paragraph::new(build_help_text(theme))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .title(" Help "),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(help, modal_area);
}

fn build_help_text(theme: &Theme) -> Vec<Line<'static>> {
    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<14}", key), theme.accent_style()),
            Span::raw(desc),
        ])
    };
    vec![
        Line::from(Span::styled(
            "Player Shortcuts",
            theme.accent_bold_style(),
        )),
        Line::from(""),
        entry("→, n, Enter", "Start / next set / skip rest"),
        entry("Space, k", "Pause or resume"),
        entry("s", "Skip exercise"),
        entry("g", "Switch image variant"),
        entry("e", "Edit session note"),
        entry("Esc, q", "Exit (asks first)"),
        entry("?", "Toggle this help"),
        Line::from(""),
        Line::from(Span::styled(
            "The buttons can be clicked too.",
            theme.text_secondary_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            theme.text_secondary_style(),
        )),
    ]
}

pub fn render_confirm_exit(frame: &mut Frame, area: Rect, theme: &Theme) {
    let modal_area = modal_rect(44, 7, area);
    frame.render_widget(Clear, modal_area);

    let text = vec![
        Line::from(Span::styled(
            "Leave this workout?",
            theme.error_style().add_modifier(Modifier::BOLD),
        )),
        Line::from("Progress will not be saved."),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", theme.error_style()),
            Span::raw(": Yes, exit  |  "),
            Span::styled("n", theme.accent_style()),
            Span::raw(": No, keep going"),
        ]),
    ];

    let confirm = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.error))
                .title(" Confirm Exit "),
        )
        .alignment(Alignment::Center);
    frame.render_widget(confirm, modal_area);
}

pub fn render_summary(frame: &mut Frame, area: Rect, engine: &PlayerEngine, theme: &Theme) {
    let modal_area = modal_rect(44, 9, area);
    frame.render_widget(Clear, modal_area);

    let text = vec![
        Line::from(Span::styled("Workout Complete!", theme.work_style())),
        Line::from(Span::styled(
            engine.workout_name().to_string(),
            theme.text_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Duration: ", theme.text_secondary_style()),
            Span::styled(
                format_clock(engine.state().total_elapsed_seconds()),
                theme.text_style(),
            ),
        ]),
        Line::from(vec![
            Span::styled("Exercises: ", theme.text_secondary_style()),
            Span::styled(engine.total_exercises().to_string(), theme.text_style()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", theme.accent_style()),
            Span::raw(": Done"),
        ]),
    ];

    let summary = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.work)),
        )
        .alignment(Alignment::Center);
    frame.render_widget(summary, modal_area);
}
