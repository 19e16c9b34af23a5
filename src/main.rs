mod agent;
mod config;
mod errors;
mod models;
mod routes;
mod service;

use anyhow::Context;
use tracing::info;

use crate::agent::{GroqAgentService, TranslateService};
use crate::config::Config;
use crate::service::relay_service::RelayService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (development convenience)
    dotenvy::dotenv().ok();

    // Initialise tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "relay=debug,tower_http=debug".into()),
        )
        .init();

    // ── Configuration ─────────────────────────────────────────────────────────
    // A missing credential is fatal: never serve with a known-broken setup.
    let config = Config::from_env().context("invalid configuration")?;
    info!(
        groq = %config.groq_api_base_url,
        translate = %config.translate_api_base_url,
        static_dir = %config.static_dir,
        "GROQ_API_KEY configured"
    );

    // ── Dependency wiring ─────────────────────────────────────────────────────
    let http = reqwest::Client::new();
    let agent = GroqAgentService::new(http.clone(), &config.groq_api_base_url, &config.groq_api_key);
    let translator = TranslateService::new(http, &config.translate_api_base_url);
    let relay = RelayService::new(agent, translator, !config.groq_api_key.is_empty());

    let app = routes::router(relay, &config.static_dir);

    // ── Listen ────────────────────────────────────────────────────────────────
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running on http://localhost:{}/", config.port);
    info!("Health check: http://localhost:{}/health", config.port);

    axum::serve(listener, app).await?;
    Ok(())
}
