use serde_json::Value;
use tracing::{debug, error};

use crate::errors::AppError;
use crate::models::Translation;

/// Client for the public `translate_a/single` endpoint.
#[derive(Clone)]
pub struct TranslateService {
    client: reqwest::Client,
    base_url: String,
}

impl TranslateService {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<Translation, AppError> {
        debug!("Translating {} chars ({source} -> {target})", text.len());

        let res = self
            .client
            .get(format!("{}/translate_a/single", self.base_url))
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| {
                error!("Translate request failed: {e}");
                AppError::TranslateFailed { message: e.to_string() }
            })?;

        let status = res.status();
        if !status.is_success() {
            error!("Translate API responded with HTTP {status}");
            return Err(AppError::TranslateHttp { status: status.as_u16() });
        }

        let data = res.json::<Value>().await.map_err(|e| {
            error!("Failed to decode translate response: {e}");
            AppError::MalformedTranslation { message: e.to_string() }
        })?;

        let translation = decode_translation(&data);
        if translation.text.is_empty() {
            return Err(AppError::EmptyTranslation);
        }
        Ok(translation)
    }
}

/// Flattens `[[["chunk", "orig", ...], ...], _, "detected"]`.
/// Segments without a leading string contribute nothing.
pub fn decode_translation(data: &Value) -> Translation {
    let text = data
        .get(0)
        .and_then(Value::as_array)
        .map(|segments| {
            segments
                .iter()
                .filter_map(|seg| seg.get(0).and_then(Value::as_str))
                .collect::<String>()
        })
        .unwrap_or_default();

    let detected_language = data
        .get(2)
        .and_then(Value::as_str)
        .filter(|lang| !lang.is_empty())
        .map(str::to_string);

    Translation { text, detected_language }
}
