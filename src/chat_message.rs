use crate::theme::Theme;
use chrono::{DateTime, Local};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// One entry of the transcript. The timestamp is captured at creation and
/// displayed as a short clock time.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub sender: Sender,
    timestamp: DateTime<Local>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text.into(), Sender::User)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(text.into(), Sender::Bot)
    }

    fn new(text: String, sender: Sender) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            sender,
            timestamp: Local::now(),
        }
    }

    pub fn timestamp_display(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }

    fn label(&self) -> &'static str {
        match self.sender {
            Sender::User => "you",
            Sender::Bot => "solace",
        }
    }

    fn indent(&self) -> &'static str {
        // User bubbles sit slightly to the right, bot bubbles flush left.
        match self.sender {
            Sender::User => "    ",
            Sender::Bot => "",
        }
    }

    fn bubble_style(&self, theme: Theme) -> Style {
        match self.sender {
            Sender::User => theme.user_bubble(),
            Sender::Bot => theme.bot_bubble(),
        }
    }

    /// Renders the message as a small bordered bubble, wrapped to the given
    /// area.
    pub fn render(&self, area: Rect, theme: Theme) -> Vec<Line<'static>> {
        let style = self.bubble_style(theme);
        let indent = self.indent();
        let mut lines = Vec::new();

        lines.push(Line::from(vec![
            Span::styled(indent.to_string(), style),
            Span::styled("┌─ ".to_string(), style),
            Span::styled(
                self.label().to_string(),
                style.add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ".to_string(), style),
            Span::styled(
                self.timestamp_display(),
                style.add_modifier(Modifier::DIM),
            ),
        ]));

        let wrap_width = (area.width as usize)
            .saturating_sub(indent.len() + 4)
            .max(8);
        for wrapped in wrap(&self.text, wrap_width) {
            lines.push(Line::from(vec![
                Span::styled(indent.to_string(), style),
                Span::styled("│ ".to_string(), style),
                Span::styled(wrapped.to_string(), style),
            ]));
        }

        lines.push(Line::from(vec![
            Span::styled(indent.to_string(), style),
            Span::styled("╰─".to_string(), style),
        ]));

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flatten(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn constructors_assign_sender_and_id() {
        let user = ChatMessage::user("hello");
        let bot = ChatMessage::bot("hi there");

        assert_eq!(user.sender, Sender::User);
        assert_eq!(bot.sender, Sender::Bot);
        assert_ne!(user.id, bot.id);
    }

    #[test]
    fn timestamp_display_is_clock_time() {
        let msg = ChatMessage::user("hello");
        let display = msg.timestamp_display();

        assert_eq!(display.len(), 5);
        assert_eq!(display.as_bytes()[2], b':');
        assert!(display
            .chars()
            .enumerate()
            .all(|(i, c)| i == 2 || c.is_ascii_digit()));
    }

    #[test]
    fn render_contains_label_and_text() {
        let msg = ChatMessage::bot("it is okay to feel this way");
        let lines = msg.render(Rect::new(0, 0, 60, 10), Theme::Dark);

        assert!(lines.len() >= 3);
        assert!(flatten(&lines[0]).contains("solace"));
        let body: String = lines.iter().map(|l| flatten(l)).collect();
        assert!(body.contains("it is okay to feel this way"));
    }

    #[test]
    fn long_text_wraps_over_multiple_lines() {
        let msg = ChatMessage::user("word ".repeat(40));
        let lines = msg.render(Rect::new(0, 0, 30, 10), Theme::Dark);

        // Header + footer + more than one content row.
        assert!(lines.len() > 4);
    }
}
