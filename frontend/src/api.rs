use gloo_net::http::Request;

use crate::composer::Mode;
use crate::models::{ErrorBody, GenerateRequest, GenerateResponse, TranslateRequest, TranslateResponse};
use crate::render::render;

/// Endpoints are relative: the backend serves this app.
const GENERATE_URL: &str = "/api/generate";
const TRANSLATE_URL: &str = "/api/translate";

pub const TRANSLATE_SOURCE: &str = "auto";
pub const TRANSLATE_TARGET: &str = "en";

/// What the output panel should show once a request settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayResult {
    /// Sanitized markup, safe for `inner_html`.
    Rendered(String),
    /// Plain `Error: ...` text.
    Error(String),
}

impl DisplayResult {
    fn error(message: impl std::fmt::Display) -> Self {
        DisplayResult::Error(format!("Error: {message}"))
    }
}

/// Sends one request for `operand` and maps whatever comes back to display text.
/// No retry, no cancellation.
pub async fn submit(mode: Mode, operand: &str) -> DisplayResult {
    let request = match mode {
        Mode::Generate => Request::post(GENERATE_URL).json(&GenerateRequest {
            prompt: operand.to_string(),
        }),
        Mode::Translate => Request::post(TRANSLATE_URL).json(&TranslateRequest {
            text: operand.to_string(),
            source: TRANSLATE_SOURCE.to_string(),
            target: TRANSLATE_TARGET.to_string(),
        }),
    };
    let request = match request {
        Ok(r) => r,
        Err(e) => return DisplayResult::error(format!("Serialize error: {e}")),
    };

    let resp = match request.send().await {
        Ok(r) => r,
        Err(e) => {
            log::error!("Request to backend failed: {e}");
            return DisplayResult::error(format!("Network error: {e}"));
        }
    };

    let status = resp.status();
    let body = match resp.text().await {
        Ok(b) => b,
        Err(e) => return DisplayResult::error(format!("Network error: {e}")),
    };
    log::debug!("Backend answered HTTP {status} ({} bytes)", body.len());

    interpret_response(mode, status, &body)
}

/// Maps a backend reply to display text.
pub fn interpret_response(mode: Mode, status: u16, body: &str) -> DisplayResult {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| format!("Server error (HTTP {status})"));
        return DisplayResult::error(message);
    }

    let text = match mode {
        Mode::Generate => serde_json::from_str::<GenerateResponse>(body).map(|r| r.result),
        Mode::Translate => serde_json::from_str::<TranslateResponse>(body).map(|r| {
            log::debug!(
                "Translated {} -> {}",
                r.source_language.as_deref().unwrap_or("?"),
                r.target_language.as_deref().unwrap_or("?")
            );
            r.translated_text
        }),
    };

    match text {
        Ok(text) if !text.trim().is_empty() => DisplayResult::Rendered(render(&text)),
        Ok(_) => DisplayResult::error("Empty response from server"),
        Err(e) => DisplayResult::error(format!("Invalid response from server: {e}")),
    }
}
