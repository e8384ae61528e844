use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

const EXAMPLE_PROMPTS: [&str; 5] = [
    "I feel sad today.",
    "I am stressed about work.",
    "I can not sleep at night.",
    "I feel anxious about my future.",
    "I need advice about stress.",
];

const TIPS: [&str; 3] = [
    "Be specific about your feelings",
    "Ask for advice on specific topics",
    "Let the bot know if you need more information",
];

pub fn draw_help(f: &mut Frame<'_>, area: Rect, theme: Theme) {
    let mut lines = vec![
        Line::from(Span::styled(
            "How to use Solace",
            theme.accent().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Solace offers supportive conversation. It can offer guidance,",
            theme.base(),
        )),
        Line::from(Span::styled(
            "but it is not a replacement for professional help.",
            theme.base(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Things you could say:",
            theme.base().add_modifier(Modifier::BOLD),
        )),
    ];
    for prompt in EXAMPLE_PROMPTS {
        lines.push(Line::from(vec![
            Span::styled("  \"", theme.dim()),
            Span::styled(prompt, theme.user_bubble()),
            Span::styled("\"", theme.dim()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Tips:",
        theme.base().add_modifier(Modifier::BOLD),
    )));
    for tip in TIPS {
        lines.push(Line::from(Span::styled(format!("  • {}", tip), theme.base())));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "If you are experiencing a crisis, please contact a mental health",
        theme.warning(),
    )));
    lines.push(Line::from(Span::styled(
        "professional or your local emergency number.",
        theme.warning(),
    )));

    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(15),
            Constraint::Min(lines.len() as u16),
            Constraint::Percentage(15),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false }),
        vert[1],
    );
}
