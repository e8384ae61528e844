use crate::app::{App, AppScreen};
use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Draws the footer with key hints for the active screen.
pub fn draw_footer(f: &mut Frame<'_>, area: Rect, app: &App) {
    let instructions = match app.screen {
        AppScreen::Splash => "↑/↓ select · Enter confirm · Ctrl+C quit",
        AppScreen::Chat => "Enter send · PgUp/PgDn scroll · Ctrl+T theme · Esc menu",
        AppScreen::Help => "Esc or q to go back",
        AppScreen::QuitConfirm => "y confirm · n cancel",
        AppScreen::Quit => "",
    };

    let footer = Paragraph::new(instructions)
        .style(app.theme.dim())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(footer, area);
}
