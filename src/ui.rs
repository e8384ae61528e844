// src/ui.rs

pub mod footer;
pub mod header;
pub mod help;
pub mod quit_confirm;

use crate::app::{App, AppScreen};
use crate::chat_view::draw_chat;
use crate::key_handlers::{
    handle_chat_input, handle_help_input, handle_quit_confirm_input, handle_splash_input,
};
use crate::ui::footer::draw_footer;
use crate::ui::header::draw_header;
use crate::ui::help::draw_help;
use crate::ui::quit_confirm::draw_quit_confirm;
use crossterm::event::{self, Event as CEvent};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    widgets::Block,
    Frame, Terminal,
};
use std::{
    error::Error,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::{mpsc, Mutex};

enum Event {
    Input(CEvent),
    Tick,
}

/// Main loop of the application. Input polling runs on its own task so the
/// loop can also wake up on ticks while a request is in flight.
pub async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: Arc<Mutex<App>>,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let (tx, mut rx) = mpsc::channel::<Event>(100);

    tokio::spawn(async move {
        let mut last_tick = Instant::now();
        loop {
            let timeout = Duration::from_millis(100);
            if event::poll(timeout).unwrap_or(false) {
                if let Ok(event) = event::read() {
                    if tx.send(Event::Input(event)).await.is_err() {
                        return;
                    }
                }
            }

            if last_tick.elapsed() >= Duration::from_millis(250) {
                if tx.send(Event::Tick).await.is_err() {
                    return;
                }
                last_tick = Instant::now();
            }
        }
    });

    loop {
        {
            let mut guard = app.lock().await;
            terminal.draw(|f| draw(f, &mut guard))?;
            if guard.screen == AppScreen::Quit {
                break;
            }
        }

        tokio::select! {
            Some(event) = rx.recv() => {
                match event {
                    Event::Input(CEvent::Key(key)) => {
                        let mut guard = app.lock().await;
                        match guard.screen {
                            AppScreen::Splash => handle_splash_input(key, &mut guard, &app),
                            AppScreen::Chat => handle_chat_input(key, &mut guard, &app),
                            AppScreen::Help => handle_help_input(key, &mut guard),
                            AppScreen::QuitConfirm => handle_quit_confirm_input(key, &mut guard),
                            AppScreen::Quit => {}
                        }
                    }
                    // Ticks only force a redraw, which advances the spinner.
                    Event::Input(_) | Event::Tick => {}
                }
            }
            else => {
                break;
            }
        }
    }

    Ok(())
}

pub fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();
    f.render_widget(Block::default().style(app.theme.base()), area);

    match app.screen {
        AppScreen::Splash => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(area);
            app.splash_screen.draw(f, chunks[0], app.theme);
            draw_footer(f, chunks[1], app);
        }
        AppScreen::Chat => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(2),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ])
                .split(area);
            draw_header(f, chunks[0], app);
            draw_chat(f, app, chunks[1]);
            draw_footer(f, chunks[2], app);
        }
        AppScreen::Help => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(area);
            draw_help(f, chunks[0], app.theme);
            draw_footer(f, chunks[1], app);
        }
        AppScreen::QuitConfirm => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(area);
            draw_quit_confirm(f, chunks[0], app.theme);
            draw_footer(f, chunks[1], app);
        }
        AppScreen::Quit => {}
    }
}
