use serde::{Deserialize, Serialize};

/// Body for `POST /api/generate`.
#[derive(Clone, Debug, Serialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

/// Body for `POST /api/translate`.
#[derive(Clone, Debug, Serialize)]
pub struct TranslateRequest {
    pub text: String,
    pub source: String,
    pub target: String,
}

/// Matches the backend `GenerateResponse`.
#[derive(Clone, Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub result: String,
}

/// Matches the backend `TranslateResponse`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    #[serde(default)]
    pub translated_text: String,
    #[serde(default)]
    pub source_language: Option<String>,
    #[serde(default)]
    pub target_language: Option<String>,
}

/// Error payload returned by the backend on any non-2xx status.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
