//! Status bar rendering with keybindings and run state

use crate::input::Arrangement;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::Duration;

/// Everything the status bar shows
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub is_running: bool,
    pub has_error: bool,
    pub is_finished: bool,
    pub rate: u32,
    pub delay: Duration,
    pub element_count: usize,
    pub arrangement: Arrangement,
    pub seed: u64,
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    // Left side: state badge, settings and message
    let (badge, badge_color) = if data.has_error {
        (" ERROR ", DEFAULT_THEME.error)
    } else if data.is_finished {
        (" DONE ", DEFAULT_THEME.success)
    } else if data.is_running {
        (" ▶ RUNNING ", DEFAULT_THEME.secondary)
    } else {
        (" PAUSED ", DEFAULT_THEME.primary)
    };

    let sep_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.comment);
    let left_spans = vec![
        Span::styled(
            badge,
            Style::default()
                .bg(badge_color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                " rate {} ({}ms) · {} {} · seed {} ",
                data.rate,
                data.delay.as_millis(),
                data.element_count,
                data.arrangement,
                data.seed
            ),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled("│", sep_style),
        Span::styled(
            format!(" {} ", data.message),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);

    let bindings: [(&str, &str); 9] = [
        (" ⎵ ", " run "),
        (" → ", " tick "),
        (" +/- ", " speed "),
        (" r ", " shuffle "),
        (" a/b ", " algorithm "),
        (" c ", " compare "),
        (" n/o ", " size/order "),
        (" ↵/⌫ ", " end/reset "),
        (" q ", " quit "),
    ];

    let mut right_spans = Vec::with_capacity(bindings.len() * 3);
    for (i, (key, desc)) in bindings.iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
        }
        right_spans.push(Span::styled(*key, key_style));
        right_spans.push(Span::styled(*desc, desc_style));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
