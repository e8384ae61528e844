use crate::constants::WELCOME_MESSAGE;
use crate::log_view::ActivityLog;
use crate::splash_screen::SplashScreen;
use crate::status_indicator::StatusIndicator;
use crate::theme::Theme;
use crate::transcript::Transcript;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Splash,
    Chat,
    Help,
    QuitConfirm,
    Quit,
}

/// All mutable state of the running client. Shared behind an
/// `Arc<tokio::sync::Mutex<App>>` between the event loop and the spawned
/// request tasks.
pub struct App {
    pub screen: AppScreen,
    pub return_screen: AppScreen,
    pub splash_screen: SplashScreen,
    pub transcript: Transcript,
    pub input: String,
    pub chat_scroll: u16,
    pub logs_scroll: u16,
    pub thinking: bool,
    pub theme: Theme,
    pub status_indicator: StatusIndicator,
    pub logs: ActivityLog,
    pub backend_url: String,
    pub backend_reachable: Option<bool>,
    pub http: reqwest::Client,
    welcomed: bool,
}

impl App {
    pub fn new(backend_url: impl Into<String>, theme: Theme) -> App {
        App {
            screen: AppScreen::Splash,
            return_screen: AppScreen::Splash,
            splash_screen: SplashScreen::new(),
            transcript: Transcript::new(),
            input: String::new(),
            chat_scroll: 0,
            logs_scroll: 0,
            thinking: false,
            theme,
            status_indicator: StatusIndicator::new(),
            logs: ActivityLog::new(),
            backend_url: backend_url.into(),
            backend_reachable: None,
            http: reqwest::Client::new(),
            welcomed: false,
        }
    }

    pub fn scroll_chat_up(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_sub(1);
    }

    pub fn scroll_chat_down(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_add(1);
    }

    pub fn scroll_logs_up(&mut self) {
        self.logs_scroll = self.logs_scroll.saturating_sub(1);
    }

    pub fn scroll_logs_down(&mut self) {
        self.logs_scroll = self.logs_scroll.saturating_add(1);
    }

    /// Switches to the chat screen. The first visit seeds the transcript
    /// with the greeting so the window never opens empty.
    pub fn enter_chat(&mut self) {
        self.screen = AppScreen::Chat;
        if !self.welcomed {
            self.transcript.push_bot(WELCOME_MESSAGE);
            self.welcomed = true;
        }
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        self.logs.add(format!("theme switched to {}", self.theme.name()));
        self.theme
    }

    /// Records the user's message and marks the request as in flight. Runs
    /// in the key handler before the request task is spawned; the user's
    /// message always lands ahead of the reply.
    pub fn begin_submission(&mut self, text: &str) {
        self.transcript.push_user(text);
        self.thinking = true;
        self.status_indicator.set_thinking(true);
        self.status_indicator.clear_status();
        self.chat_scroll = u16::MAX;
        self.logs.add("sending message to backend...");
    }

    pub fn open_quit_confirm(&mut self) {
        self.return_screen = self.screen;
        self.screen = AppScreen::QuitConfirm;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat_message::Sender;

    fn test_app() -> App {
        App::new("http://127.0.0.1:8000", Theme::Dark)
    }

    #[test]
    fn entering_chat_seeds_the_greeting_once() {
        let mut app = test_app();
        assert!(app.transcript.is_empty());

        app.enter_chat();
        assert_eq!(app.screen, AppScreen::Chat);
        assert_eq!(app.transcript.len(), 1);
        assert_eq!(app.transcript.last().map(|m| m.sender), Some(Sender::Bot));

        app.screen = AppScreen::Splash;
        app.enter_chat();
        assert_eq!(app.transcript.len(), 1);
    }

    #[test]
    fn begin_submission_appends_user_message_and_marks_thinking() {
        let mut app = test_app();
        app.begin_submission("I feel anxious");

        assert!(app.thinking);
        assert_eq!(app.transcript.len(), 1);
        let last = app.transcript.last().unwrap();
        assert_eq!(last.sender, Sender::User);
        assert_eq!(last.text, "I feel anxious");
    }

    #[test]
    fn quit_confirm_remembers_where_it_came_from() {
        let mut app = test_app();
        app.enter_chat();
        app.open_quit_confirm();

        assert_eq!(app.screen, AppScreen::QuitConfirm);
        assert_eq!(app.return_screen, AppScreen::Chat);
    }

    #[test]
    fn toggle_theme_flips_and_reports() {
        let mut app = test_app();
        assert_eq!(app.toggle_theme(), Theme::Light);
        assert_eq!(app.toggle_theme(), Theme::Dark);
    }

    #[test]
    fn chat_scroll_saturates_at_zero() {
        let mut app = test_app();
        app.scroll_chat_up();
        assert_eq!(app.chat_scroll, 0);

        app.scroll_chat_down();
        app.scroll_chat_down();
        app.scroll_chat_up();
        assert_eq!(app.chat_scroll, 1);
    }
}
