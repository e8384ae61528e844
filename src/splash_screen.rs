use crate::constants::APP_TAGLINE;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

#[derive(Debug)]
pub struct SplashScreen {
    pub selected_idx: usize,
    pub menu_items: Vec<&'static str>,
}

impl SplashScreen {
    pub fn new() -> Self {
        Self {
            selected_idx: 0,
            menu_items: vec!["start chat", "help", "quit"],
        }
    }

    pub fn draw(&self, f: &mut Frame, area: ratatui::layout::Rect, theme: Theme) {
        let hsplit = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);

        let banner = r#" ___  ___  _  ___  ___  ___
|_ -|| . || || .'||  _|| -_|
|___||___||_||__,||___||___|"#;

        let mut banner_lines: Vec<Line> = banner
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), theme.accent())))
            .collect();
        banner_lines.push(Line::from(""));
        banner_lines.push(Line::from(Span::styled(
            APP_TAGLINE,
            theme.dim().add_modifier(Modifier::ITALIC),
        )));
        banner_lines.push(Line::from(""));
        banner_lines.push(Line::from(Span::styled(
            "Conversations stay on this screen and are gone when you leave.",
            theme.dim(),
        )));

        let banner_par = Paragraph::new(banner_lines)
            .alignment(Alignment::Center)
            .block(Block::default())
            .wrap(Wrap { trim: false });

        let banner_vert = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(hsplit[0]);

        f.render_widget(banner_par, banner_vert[1]);

        let mut menu_lines = Vec::new();
        for (i, item) in self.menu_items.iter().enumerate() {
            let selected = i == self.selected_idx;
            let style = if selected {
                theme.accent().add_modifier(Modifier::BOLD)
            } else {
                theme.base()
            };
            menu_lines.push(Line::from(Span::styled(
                format!("{} {}", if selected { "▶" } else { " " }, item),
                style,
            )));
        }
        let menu_par = Paragraph::new(menu_lines)
            .alignment(Alignment::Center)
            .block(Block::default());

        let menu_line_count = self.menu_items.len() as u16;

        let menu_vert = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(50),
                Constraint::Length(menu_line_count),
                Constraint::Percentage(50),
            ])
            .split(hsplit[1]);

        f.render_widget(menu_par, menu_vert[1]);
    }

    pub fn handle_input(&mut self, key: crossterm::event::KeyEvent) -> Option<SplashScreenAction> {
        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Down) => {
                self.selected_idx = (self.selected_idx + 1) % self.menu_items.len();
                None
            }
            (KeyModifiers::NONE, KeyCode::Up) => {
                if self.selected_idx == 0 {
                    self.selected_idx = self.menu_items.len() - 1;
                } else {
                    self.selected_idx -= 1;
                }
                None
            }
            (KeyModifiers::NONE, KeyCode::Enter) => {
                let selected = self.menu_items[self.selected_idx];
                match selected {
                    "start chat" => Some(SplashScreenAction::StartChat),
                    "help" => Some(SplashScreenAction::Help),
                    "quit" => Some(SplashScreenAction::Quit),
                    _ => None,
                }
            }
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(SplashScreenAction::Quit),
            _ => None,
        }
    }
}

impl Default for SplashScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub enum SplashScreenAction {
    StartChat,
    Help,
    Quit,
}
