use crate::constants::{CHAT_PATH, HEALTH_PATH};
use crate::errors::{SolaceError, SolaceResult};
use crate::logging::{log_api_call, ApiCallLog};
use serde::{Deserialize, Serialize};
use std::time::Instant;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    response: Option<String>,
}

fn chat_url(backend_url: &str) -> String {
    format!("{}{}", backend_url.trim_end_matches('/'), CHAT_PATH)
}

fn health_url(backend_url: &str) -> String {
    format!("{}{}", backend_url.trim_end_matches('/'), HEALTH_PATH)
}

/// Sends one user message to the backend and returns the bot's reply text.
///
/// Exactly one request goes out per call. Failed sends, non-success
/// statuses and bodies without a usable reply all come back as `Err`; the
/// caller decides what to show instead.
pub async fn send_chat(
    client: &reqwest::Client,
    backend_url: &str,
    text: &str,
) -> SolaceResult<String> {
    let url = chat_url(backend_url);
    let start = Instant::now();

    let response = client
        .post(url.as_str())
        .header("Content-Type", "application/json")
        .json(&ChatRequest { text })
        .send()
        .await
        .map_err(|e| SolaceError::api_error(format!("request failed: {}", e)))?;

    let status = response.status();
    log_api_call(&ApiCallLog {
        endpoint: url.clone(),
        request_summary: format!("text {} chars", text.len()),
        response_status: status.as_u16(),
        response_time_ms: start.elapsed().as_millis(),
    });

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SolaceError::api_error(format!(
            "backend returned {}: {}",
            status, body
        )));
    }

    let reply: ChatReply = response
        .json()
        .await
        .map_err(|e| SolaceError::api_error(format!("invalid reply body: {}", e)))?;

    reply
        .response
        .filter(|r| !r.trim().is_empty())
        .ok_or_else(|| SolaceError::api_error("reply missing 'response' field"))
}

/// Probes the backend's health endpoint. Success only says the server is
/// reachable, nothing about the body.
pub async fn check_backend(client: &reqwest::Client, backend_url: &str) -> SolaceResult<()> {
    let url = health_url(backend_url);
    client
        .get(url.as_str())
        .send()
        .await
        .map_err(|e| SolaceError::api_error(format!("health check failed: {}", e)))?
        .error_for_status()
        .map_err(|e| SolaceError::api_error(format!("health check failed: {}", e)))?;
    Ok(())
}
