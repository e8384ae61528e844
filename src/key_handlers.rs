use crate::app::{App, AppScreen};
use crate::chat_view::{probe_backend, request_reply};
use crate::config::{get_config, update_config};
use crate::splash_screen::SplashScreenAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Drains the input box and returns the trimmed text, if any. Whitespace
/// only submissions are discarded here, before a request could be spawned.
pub fn take_submission(input: &mut String) -> Option<String> {
    let trimmed = input.trim().to_string();
    input.clear();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

pub fn handle_splash_input(key: KeyEvent, app: &mut App, app_arc: &Arc<Mutex<App>>) {
    if let Some(action) = app.splash_screen.handle_input(key) {
        match action {
            SplashScreenAction::StartChat => {
                app.enter_chat();
                if app.backend_reachable.is_none() {
                    tokio::spawn(probe_backend(app_arc.clone()));
                }
            }
            SplashScreenAction::Help => {
                app.screen = AppScreen::Help;
            }
            SplashScreenAction::Quit => {
                app.screen = AppScreen::Quit;
            }
        }
    }
}

pub fn handle_chat_input(key: KeyEvent, app: &mut App, app_arc: &Arc<Mutex<App>>) {
    match key.code {
        KeyCode::Esc => {
            app.screen = AppScreen::Splash;
        }
        KeyCode::Enter => {
            if let Some(text) = take_submission(&mut app.input) {
                app.begin_submission(&text);
                tokio::spawn(request_reply(app_arc.clone(), text));
            }
        }
        KeyCode::PageUp => app.scroll_chat_up(),
        KeyCode::PageDown => app.scroll_chat_down(),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'c' => app.open_quit_confirm(),
                    't' => {
                        let theme = app.toggle_theme();
                        let mut config = get_config();
                        config.theme = theme;
                        if let Err(e) = update_config(config) {
                            log::warn!("failed to persist theme choice: {}", e);
                        }
                    }
                    'u' => app.scroll_logs_up(),
                    'd' => app.scroll_logs_down(),
                    _ => {}
                }
            } else {
                app.input.push(c);
            }
        }
        _ => {}
    }
}

pub fn handle_help_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => {
            app.screen = AppScreen::Splash;
        }
        _ => {}
    }
}

pub fn handle_quit_confirm_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            app.screen = AppScreen::Quit;
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            app.screen = app.return_screen;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn take_submission_returns_trimmed_text() {
        let mut input = String::from("  hello there  ");
        assert_eq!(take_submission(&mut input).as_deref(), Some("hello there"));
        assert!(input.is_empty());
    }

    #[test]
    fn take_submission_discards_whitespace_only_input() {
        let mut input = String::from("   \t ");
        assert_eq!(take_submission(&mut input), None);
        assert!(input.is_empty());

        let mut empty = String::new();
        assert_eq!(take_submission(&mut empty), None);
    }

    #[tokio::test]
    async fn blank_enter_does_not_touch_the_transcript() {
        let app = Arc::new(Mutex::new(App::new("http://127.0.0.1:1", Theme::Dark)));
        let mut guard = app.lock().await;
        guard.enter_chat();
        guard.input = "   ".to_string();
        let before = guard.transcript.len();

        handle_chat_input(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            &mut guard,
            &app,
        );

        assert_eq!(guard.transcript.len(), before);
        assert!(guard.input.is_empty());
        assert!(!guard.thinking);
    }

    #[tokio::test]
    async fn typing_appends_and_backspace_removes() {
        let app = Arc::new(Mutex::new(App::new("http://127.0.0.1:1", Theme::Dark)));
        let mut guard = app.lock().await;
        guard.enter_chat();

        for c in "hiya".chars() {
            handle_chat_input(
                KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE),
                &mut guard,
                &app,
            );
        }
        assert_eq!(guard.input, "hiya");

        handle_chat_input(
            KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE),
            &mut guard,
            &app,
        );
        assert_eq!(guard.input, "hiy");
    }

    #[test]
    fn quit_confirm_honours_both_answers() {
        let mut app = App::new("http://127.0.0.1:1", Theme::Dark);
        app.enter_chat();
        app.open_quit_confirm();

        handle_quit_confirm_input(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE), &mut app);
        assert_eq!(app.screen, AppScreen::Chat);

        app.open_quit_confirm();
        handle_quit_confirm_input(KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE), &mut app);
        assert_eq!(app.screen, AppScreen::Quit);
    }
}
