use tracing::info;

use crate::agent::{GroqAgentService, TranslateService};
use crate::errors::AppError;
use crate::models::{
    GenerateRequest, GenerateResponse, HealthResponse, TranslateRequest, TranslateResponse,
};

pub const DEFAULT_SOURCE_LANGUAGE: &str = "auto";
pub const DEFAULT_TARGET_LANGUAGE: &str = "en";

/// Stateless relay between the HTTP routes and the upstream services.
#[derive(Clone)]
pub struct RelayService {
    agent: GroqAgentService,
    translator: TranslateService,
    api_key_configured: bool,
}

impl RelayService {
    pub fn new(
        agent: GroqAgentService,
        translator: TranslateService,
        api_key_configured: bool,
    ) -> Self {
        Self { agent, translator, api_key_configured }
    }

    pub async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, AppError> {
        let prompt = request
            .prompt
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(AppError::prompt_required)?;

        info!("Relaying prompt ({} chars) to completion API", prompt.len());
        let result = self.agent.complete(&prompt).await?;
        info!("Completion received ({} chars)", result.len());

        Ok(GenerateResponse { result })
    }

    pub async fn translate(
        &self,
        request: TranslateRequest,
    ) -> Result<TranslateResponse, AppError> {
        let text = request
            .text
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(AppError::text_required)?;
        let source = or_default(request.source, DEFAULT_SOURCE_LANGUAGE);
        let target = or_default(request.target, DEFAULT_TARGET_LANGUAGE);

        info!("Relaying text ({} chars) to translate API", text.len());
        let translation = self.translator.translate(&text, &source, &target).await?;

        Ok(TranslateResponse {
            translated_text: translation.text,
            source_language: translation.detected_language.unwrap_or(source),
            target_language: target,
        })
    }

    pub fn health(&self) -> HealthResponse {
        HealthResponse {
            status: "Server is running".to_string(),
            api_key_configured: self.api_key_configured,
        }
    }
}

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
