use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Color scheme for the whole interface. The selected variant is the only
/// piece of UI preference that survives a restart (via the config file).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Base style painted over every screen before widgets are drawn.
    pub fn base(self) -> Style {
        match self {
            Theme::Light => Style::default()
                .fg(Color::Rgb(33, 33, 33))
                .bg(Color::Rgb(250, 250, 245)),
            Theme::Dark => Style::default().fg(Color::White).bg(Color::Black),
        }
    }

    pub fn user_bubble(self) -> Style {
        match self {
            // The purple the web client used for outgoing bubbles.
            Theme::Light => Style::default().fg(Color::Rgb(126, 87, 194)),
            Theme::Dark => Style::default().fg(Color::Rgb(255, 223, 128)),
        }
    }

    pub fn bot_bubble(self) -> Style {
        match self {
            Theme::Light => Style::default().fg(Color::Rgb(56, 116, 60)),
            Theme::Dark => Style::default().fg(Color::Rgb(144, 238, 144)),
        }
    }

    pub fn accent(self) -> Style {
        match self {
            Theme::Light => Style::default()
                .fg(Color::Rgb(63, 81, 181))
                .add_modifier(Modifier::BOLD),
            Theme::Dark => Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        }
    }

    pub fn dim(self) -> Style {
        match self {
            Theme::Light => Style::default().fg(Color::Gray),
            Theme::Dark => Style::default().fg(Color::DarkGray),
        }
    }

    pub fn input(self) -> Style {
        match self {
            Theme::Light => Style::default().fg(Color::Rgb(33, 33, 33)),
            Theme::Dark => Style::default().fg(Color::White),
        }
    }

    pub fn warning(self) -> Style {
        match self {
            Theme::Light => Style::default().fg(Color::Rgb(176, 122, 0)),
            Theme::Dark => Style::default().fg(Color::Yellow),
        }
    }

    pub fn error(self) -> Style {
        Style::default().fg(Color::Red)
    }
}
