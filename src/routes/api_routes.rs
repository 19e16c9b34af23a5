#[cfg(test)]
#[path = "api_routes_test.rs"]
mod tests;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::warn;

use crate::errors::AppError;
use crate::models::{GenerateRequest, TranslateRequest};
use crate::service::relay_service::RelayService;

/// POST `/api/generate` — `{prompt}` → `{result}`
pub async fn generate_handler(
    State(svc): State<RelayService>,
    body: Result<Json<GenerateRequest>, JsonRejection>,
) -> Response {
    let result = match body {
        Ok(Json(request)) => svc.generate(request).await,
        Err(rejection) => Err(invalid_body(rejection)),
    };
    respond(result)
}

/// POST `/api/translate` — `{text, source?, target?}` → `{translatedText, sourceLanguage, targetLanguage}`
pub async fn translate_handler(
    State(svc): State<RelayService>,
    body: Result<Json<TranslateRequest>, JsonRejection>,
) -> Response {
    let result = match body {
        Ok(Json(request)) => svc.translate(request).await,
        Err(rejection) => Err(invalid_body(rejection)),
    };
    respond(result)
}

/// GET `/health`
pub async fn health_handler(State(svc): State<RelayService>) -> impl IntoResponse {
    Json(svc.health())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn invalid_body(rejection: JsonRejection) -> AppError {
    AppError::InvalidBody(rejection.body_text())
}

fn respond<T: serde::Serialize>(result: Result<T, AppError>) -> Response {
    match result {
        Ok(body) => Json(body).into_response(),
        Err(err) => {
            match &err {
                AppError::EmptyField { field_name, .. } => {
                    warn!("Rejected request: field '{field_name}' is empty")
                }
                err if err.is_validation() => warn!("Rejected request: {err}"),
                _ => {}
            }
            err.into_response()
        }
    }
}
