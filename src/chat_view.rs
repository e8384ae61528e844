use crate::api::{check_backend, send_chat};
use crate::app::App;
use crate::constants::FALLBACK_REPLY;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use unicode_width::UnicodeWidthStr;

pub fn draw_chat(f: &mut Frame, app: &mut App, area: Rect) {
    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
        .margin(1)
        .split(area);

    let chat_vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Min(1),
                Constraint::Length(2),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(horizontal_chunks[0]);

    draw_messages(f, app, chat_vertical_chunks[0]);

    app.status_indicator.update_spinner();
    app.status_indicator
        .render(f, chat_vertical_chunks[1], app.theme);

    draw_input(f, app, chat_vertical_chunks[2]);
    draw_logs(f, app, horizontal_chunks[1]);
}

fn draw_messages(f: &mut Frame, app: &mut App, area: Rect) {
    let mut lines = Vec::new();
    for message in app.transcript.iter() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(message.render(area, app.theme));
    }

    let total_lines = lines.len() as u16;
    let max_scroll = total_lines.saturating_sub(area.height);
    // Submissions push the scroll to the sentinel maximum; clamping here
    // keeps later PageUp presses working from the real bottom.
    if app.chat_scroll > max_scroll {
        app.chat_scroll = max_scroll;
    }

    let msgs_para = Paragraph::new(lines)
        .block(Block::default())
        .wrap(Wrap { trim: true });
    f.render_widget(msgs_para.scroll((app.chat_scroll, 0)), area);
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;
    let separator = "─".repeat(area.width as usize);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(separator.clone(), theme.dim()))),
        Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: 1,
        },
    );

    let input = Line::from(vec![
        Span::styled("→ ", theme.dim()),
        Span::styled(app.input.as_str(), theme.input()),
    ]);

    let visible_width = area.width.saturating_sub(2);
    let text_width = UnicodeWidthStr::width(app.input.as_str()) as u16;
    let scroll_offset = text_width.saturating_sub(visible_width);

    f.render_widget(
        Paragraph::new(input).scroll((0, scroll_offset)),
        Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: area.height.saturating_sub(2),
        },
    );

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(separator, theme.dim()))),
        Rect {
            x: area.x,
            y: area.y + area.height - 1,
            width: area.width,
            height: 1,
        },
    );

    let cursor_x = area.x + 2 + text_width.min(visible_width);
    f.set_cursor_position((cursor_x, area.y + 1));
}

fn draw_logs(f: &mut Frame, app: &mut App, area: Rect) {
    let theme = app.theme;
    let vsep: Vec<Line> = (0..area.height).map(|_| Line::from("│")).collect();
    f.render_widget(
        Paragraph::new(vsep).style(theme.dim()),
        Rect {
            x: area.x.saturating_sub(1),
            y: area.y,
            width: 1,
            height: area.height,
        },
    );

    let log_lines: Vec<Line> = app
        .logs
        .entries()
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled("• ", theme.dim()),
                Span::styled(entry.clone(), theme.dim()),
            ])
        })
        .collect();

    let total_log_lines = log_lines.len() as u16;
    let max_log_scroll = total_log_lines.saturating_sub(area.height);
    if app.logs_scroll > max_log_scroll {
        app.logs_scroll = max_log_scroll;
    }

    let logs_para = Paragraph::new(log_lines)
        .style(theme.dim())
        .wrap(Wrap { trim: true });
    f.render_widget(logs_para.scroll((app.logs_scroll, 0)), area);
}

/// Carries one submission through to its reply. The user's message is
/// already in the transcript when this task starts; whatever happens here
/// appends exactly one bot message after it.
pub async fn request_reply(app: Arc<Mutex<App>>, text: String) {
    let (client, backend_url) = {
        let guard = app.lock().await;
        (guard.http.clone(), guard.backend_url.clone())
    };

    match send_chat(&client, &backend_url, &text).await {
        Ok(reply) => {
            let mut guard = app.lock().await;
            guard.logs.add("reply received");
            guard.status_indicator.clear_status();
            guard.transcript.push_bot(reply);
        }
        Err(e) => {
            log::warn!("chat request failed: {}", e);
            let mut guard = app.lock().await;
            guard.logs.add(format!("request failed: {}", e));
            guard.status_indicator.set_status("last request failed");
            guard.transcript.push_bot(FALLBACK_REPLY);
        }
    }

    let mut guard = app.lock().await;
    guard.thinking = false;
    guard.status_indicator.set_thinking(false);
    guard.chat_scroll = u16::MAX;
}

/// One-shot reachability probe, fired when the chat screen is first opened.
pub async fn probe_backend(app: Arc<Mutex<App>>) {
    let (client, backend_url) = {
        let guard = app.lock().await;
        (guard.http.clone(), guard.backend_url.clone())
    };

    match check_backend(&client, &backend_url).await {
        Ok(()) => {
            let mut guard = app.lock().await;
            guard.backend_reachable = Some(true);
            guard.logs.add("backend is reachable");
        }
        Err(e) => {
            log::warn!("backend health check failed: {}", e);
            let mut guard = app.lock().await;
            guard.backend_reachable = Some(false);
            guard.logs.add("backend health check failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat_message::Sender;
    use crate::theme::Theme;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn shared_app(backend_url: &str) -> Arc<Mutex<App>> {
        Arc::new(Mutex::new(App::new(backend_url, Theme::Dark)))
    }

    async fn run_cycle(app: &Arc<Mutex<App>>, text: &str) {
        {
            let mut guard = app.lock().await;
            guard.begin_submission(text);
        }
        request_reply(app.clone(), text.to_string()).await;
    }

    #[tokio::test]
    async fn successful_reply_lands_after_the_user_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .and(body_json(json!({ "text": "hello" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "ok" })))
            .expect(1)
            .mount(&server)
            .await;

        let app = shared_app(&server.uri());
        run_cycle(&app, "hello").await;

        let guard = app.lock().await;
        let messages: Vec<(Sender, &str)> = guard
            .transcript
            .iter()
            .map(|m| (m.sender, m.text.as_str()))
            .collect();
        assert_eq!(
            messages,
            vec![(Sender::User, "hello"), (Sender::Bot, "ok")]
        );
        assert!(!guard.thinking);
    }

    #[tokio::test]
    async fn server_error_appends_the_fallback_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let app = shared_app(&server.uri());
        run_cycle(&app, "hello").await;

        let guard = app.lock().await;
        assert_eq!(guard.transcript.len(), 2);
        assert_eq!(
            guard.transcript.last().map(|m| m.text.as_str()),
            Some(FALLBACK_REPLY)
        );
        assert!(!guard.thinking);
    }

    #[tokio::test]
    async fn malformed_reply_appends_the_fallback_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "detail": "nope" })))
            .mount(&server)
            .await;

        let app = shared_app(&server.uri());
        run_cycle(&app, "hello").await;

        let guard = app.lock().await;
        assert_eq!(
            guard.transcript.last().map(|m| m.text.as_str()),
            Some(FALLBACK_REPLY)
        );
    }

    #[tokio::test]
    async fn replies_follow_their_messages_in_order() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "response": "take care" })),
            )
            .expect(2)
            .mount(&server)
            .await;

        let app = shared_app(&server.uri());
        run_cycle(&app, "first").await;
        run_cycle(&app, "second").await;

        let guard = app.lock().await;
        let senders: Vec<Sender> = guard.transcript.iter().map(|m| m.sender).collect();
        assert_eq!(
            senders,
            vec![Sender::User, Sender::Bot, Sender::User, Sender::Bot]
        );
        let texts: Vec<&str> = guard.transcript.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts[0], "first");
        assert_eq!(texts[2], "second");
    }

    #[tokio::test]
    async fn probe_marks_backend_reachable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/test"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let app = shared_app(&server.uri());
        probe_backend(app.clone()).await;

        assert_eq!(app.lock().await.backend_reachable, Some(true));
    }

    #[tokio::test]
    async fn probe_marks_backend_unreachable() {
        let app = shared_app("http://127.0.0.1:1");
        probe_backend(app.clone()).await;

        assert_eq!(app.lock().await.backend_reachable, Some(false));
    }
}
