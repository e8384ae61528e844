use crate::app::App;
use crate::constants::{APP_NAME, APP_TAGLINE};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn draw_header(f: &mut Frame<'_>, area: Rect, app: &App) {
    let theme = app.theme;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let title = Line::from(vec![
        Span::styled(
            format!(" {}", APP_NAME),
            theme.accent().add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", APP_TAGLINE), theme.dim()),
    ]);
    f.render_widget(Paragraph::new(title).alignment(Alignment::Left), cols[0]);

    let (dot_style, backend_label) = match app.backend_reachable {
        None => (theme.dim(), "checking backend..."),
        Some(true) => (theme.bot_bubble(), "backend connected"),
        Some(false) => (theme.error(), "backend unreachable"),
    };
    let status = Line::from(vec![
        Span::styled("● ", dot_style),
        Span::styled(backend_label, theme.dim()),
        Span::styled(format!("  theme: {} ", theme.name()), theme.dim()),
    ]);
    f.render_widget(Paragraph::new(status).alignment(Alignment::Right), cols[1]);

    let separator = "─".repeat(area.width as usize);
    f.render_widget(
        Paragraph::new(Span::styled(separator, theme.dim())),
        rows[1],
    );
}
