pub mod api_routes;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::service::relay_service::RelayService;
use api_routes::{generate_handler, health_handler, translate_handler};

/// Full application router: the JSON API plus the built front end as fallback.
pub fn router(svc: RelayService, static_dir: &str) -> Router {
    Router::new()
        .route("/api/generate", post(generate_handler))
        .route("/api/translate", post(translate_handler))
        .route("/health", get(health_handler))
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(svc)
}
