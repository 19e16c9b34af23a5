use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::errors::AppError;

pub const MODEL: &str = "llama-3.3-70b-versatile";
pub const MAX_TOKENS: u32 = 1024;

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<MessageRequest<'a>>,
}

#[derive(Debug, Serialize)]
struct MessageRequest<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<ChoiceResponse>,
}

#[derive(Debug, Deserialize)]
struct ChoiceResponse {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Single-shot chat completion against the Groq OpenAI-compatible API.
#[derive(Clone)]
pub struct GroqAgentService {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GroqAgentService {
    pub fn new(client: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Sends `prompt` as one user message and returns the first choice's text.
    pub async fn complete(&self, prompt: &str) -> Result<String, AppError> {
        let body = CompletionRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            messages: vec![MessageRequest { role: "user", content: prompt }],
        };

        debug!("Calling Groq API with model {MODEL}");

        let res = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("Groq request failed: {e}");
                AppError::Completion { message: e.to_string() }
            })?;

        let status = res.status();
        if !status.is_success() {
            error!("Groq API responded with HTTP {status}");
            return Err(match status {
                StatusCode::UNAUTHORIZED => AppError::InvalidApiKey,
                StatusCode::TOO_MANY_REQUESTS => AppError::RateLimited,
                _ => {
                    let message = match res.json::<ErrorResponse>().await {
                        Ok(err) => err.error.message,
                        Err(_) => format!("Groq API HTTP {}", status.as_u16()),
                    };
                    AppError::Completion { message }
                }
            });
        }

        let completion = res.json::<CompletionResponse>().await.map_err(|e| {
            error!("Failed to decode Groq response: {e}");
            AppError::Completion { message: format!("Invalid Groq response: {e}") }
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| AppError::Completion {
                message: "Groq API returned no completion".to_string(),
            })
    }
}
