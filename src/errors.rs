use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::models::ErrorBody;

/// Every failure the relay can report. The `Display` text is exactly what the
/// client receives in the `error` field.
#[derive(Debug, Error)]
pub enum AppError {
    // ── Validation errors ────────────────────────────────────────────────────
    #[error("{message}")]
    EmptyField { field_name: &'static str, message: &'static str },

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    // ── Completion upstream errors ───────────────────────────────────────────
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("{message}")]
    Completion { message: String },

    // ── Translation upstream errors ──────────────────────────────────────────
    #[error("Translate API HTTP {status}")]
    TranslateHttp { status: u16 },

    #[error("Translate API returned empty text")]
    EmptyTranslation,

    #[error("Translate API returned malformed data: {message}")]
    MalformedTranslation { message: String },

    #[error("{message}")]
    TranslateFailed { message: String },
}

impl AppError {
    pub fn prompt_required() -> Self {
        AppError::EmptyField { field_name: "prompt", message: "Prompt is required" }
    }

    pub fn text_required() -> Self {
        AppError::EmptyField {
            field_name: "text",
            message: "Text is required for translation",
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::EmptyField { .. } | AppError::InvalidBody(_))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::EmptyField { .. } | AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidApiKey => StatusCode::UNAUTHORIZED,
            AppError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            AppError::TranslateHttp { .. }
            | AppError::EmptyTranslation
            | AppError::MalformedTranslation { .. } => StatusCode::BAD_GATEWAY,
            AppError::Completion { .. } | AppError::TranslateFailed { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: self.to_string() };
        (self.status(), Json(body)).into_response()
    }
}
