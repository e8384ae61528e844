use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn draw_quit_confirm(f: &mut Frame<'_>, area: Rect, theme: Theme) {
    let lines = vec![
        Line::from(Span::styled(
            "Leave the conversation?",
            theme.base().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Your conversation is not saved anywhere.",
            theme.dim(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", theme.accent().add_modifier(Modifier::BOLD)),
            Span::styled(" leave    ", theme.base()),
            Span::styled("n", theme.accent().add_modifier(Modifier::BOLD)),
            Span::styled(" stay", theme.base()),
        ]),
    ];

    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(lines.len() as u16),
            Constraint::Percentage(40),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        vert[1],
    );
}
