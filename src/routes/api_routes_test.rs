use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use mockito::Matcher;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::agent::{GroqAgentService, TranslateService};
use crate::routes::router;
use crate::service::relay_service::RelayService;

fn setup_app(upstream_url: &str) -> Router {
    let client = reqwest::Client::new();
    let svc = RelayService::new(
        GroqAgentService::new(client.clone(), upstream_url, "test_key"),
        TranslateService::new(client, upstream_url),
        true,
    );
    router(svc, "frontend/dist")
}

async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");
    send(app, req).await
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let res = app.oneshot(req).await.expect("Router failed");
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let value = serde_json::from_slice(&bytes).expect("Body is not JSON");
    (status, value)
}

fn translate_query(q: &str, sl: &str, tl: &str) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("client".into(), "gtx".into()),
        Matcher::UrlEncoded("sl".into(), sl.into()),
        Matcher::UrlEncoded("tl".into(), tl.into()),
        Matcher::UrlEncoded("dt".into(), "t".into()),
        Matcher::UrlEncoded("q".into(), q.into()),
    ])
}

// ── /api/generate ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_generate_requires_prompt() {
    let mut server = mockito::Server::new_async().await;
    let upstream = server
        .mock("POST", "/chat/completions")
        .expect(0)
        .create_async()
        .await;

    let (status, body) = post_json(setup_app(&server.url()), "/api/generate", "{}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Prompt is required");
    upstream.assert_async().await;
}

#[tokio::test]
async fn test_generate_rejects_blank_prompt() {
    let server = mockito::Server::new_async().await;
    let (status, body) =
        post_json(setup_app(&server.url()), "/api/generate", r#"{"prompt":"   "}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_generate_rejects_malformed_json() {
    let server = mockito::Server::new_async().await;
    let (status, body) =
        post_json(setup_app(&server.url()), "/api/generate", "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
}

#[tokio::test]
async fn test_generate_relays_completion() {
    let mut server = mockito::Server::new_async().await;
    let upstream = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer test_key")
        .match_body(Matcher::PartialJson(json!({
            "model": "llama-3.3-70b-versatile",
            "max_tokens": 1024,
            "messages": [{"role": "user", "content": "hi"}]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[{"message":{"content":"hello"}}]}"#)
        .expect(1)
        .create_async()
        .await;

    let (status, body) =
        post_json(setup_app(&server.url()), "/api/generate", r#"{"prompt":"hi"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"result": "hello"}));
    upstream.assert_async().await;
}

#[tokio::test]
async fn test_generate_maps_auth_failure() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_body(r#"{"error":{"message":"Invalid API Key"}}"#)
        .create_async()
        .await;

    let (status, body) =
        post_json(setup_app(&server.url()), "/api/generate", r#"{"prompt":"hi"}"#).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid API key");
}

#[tokio::test]
async fn test_generate_maps_rate_limit() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(429)
        .create_async()
        .await;

    let (status, body) =
        post_json(setup_app(&server.url()), "/api/generate", r#"{"prompt":"hi"}"#).await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["error"], "Rate limit exceeded");
}

#[tokio::test]
async fn test_generate_carries_upstream_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(400)
        .with_body(r#"{"error":{"message":"context length exceeded"}}"#)
        .create_async()
        .await;

    let (status, body) =
        post_json(setup_app(&server.url()), "/api/generate", r#"{"prompt":"hi"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "context length exceeded");
}

#[tokio::test]
async fn test_generate_empty_choices_is_an_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(r#"{"choices":[]}"#)
        .create_async()
        .await;

    let (status, body) =
        post_json(setup_app(&server.url()), "/api/generate", r#"{"prompt":"hi"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Groq API returned no completion");
}

// ── /api/translate ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_translate_requires_text() {
    let server = mockito::Server::new_async().await;
    let (status, body) =
        post_json(setup_app(&server.url()), "/api/translate", r#"{"text":""}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Text is required for translation");
}

#[tokio::test]
async fn test_translate_relays_with_defaults() {
    let mut server = mockito::Server::new_async().await;
    let upstream = server
        .mock("GET", "/translate_a/single")
        .match_query(translate_query("hola", "auto", "en"))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[[["hello","hola",null,null]],null,"es"]"#)
        .expect(1)
        .create_async()
        .await;

    let (status, body) =
        post_json(setup_app(&server.url()), "/api/translate", r#"{"text":"hola"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"translatedText": "hello", "sourceLanguage": "es", "targetLanguage": "en"})
    );
    upstream.assert_async().await;
}

#[tokio::test]
async fn test_translate_echoes_source_without_detection() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/translate_a/single")
        .match_query(translate_query("bonjour le monde", "fr", "de"))
        .with_status(200)
        .with_body(r#"[[["Hallo ","bonjour ",null],["Welt","le monde",null]]]"#)
        .create_async()
        .await;

    let (status, body) = post_json(
        setup_app(&server.url()),
        "/api/translate",
        r#"{"text":"bonjour le monde","source":"fr","target":"de"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["translatedText"], "Hallo Welt");
    assert_eq!(body["sourceLanguage"], "fr");
    assert_eq!(body["targetLanguage"], "de");
}

#[tokio::test]
async fn test_translate_upstream_status_is_bad_gateway() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/translate_a/single")
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let (status, body) =
        post_json(setup_app(&server.url()), "/api/translate", r#"{"text":"hola"}"#).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "Translate API HTTP 503");
}

#[tokio::test]
async fn test_translate_empty_result_is_bad_gateway() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/translate_a/single")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"[[],null,"es"]"#)
        .create_async()
        .await;

    let (status, body) =
        post_json(setup_app(&server.url()), "/api/translate", r#"{"text":"hola"}"#).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "Translate API returned empty text");
}

#[tokio::test]
async fn test_translate_malformed_payload_is_bad_gateway() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/translate_a/single")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let (status, body) =
        post_json(setup_app(&server.url()), "/api/translate", r#"{"text":"hola"}"#).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Translate API returned malformed data"));
}

// ── Unreachable upstream ──────────────────────────────────────────────────────

// Nothing listens on port 1, so every upstream call fails before any HTTP status.
const CLOSED_UPSTREAM: &str = "http://127.0.0.1:1";

#[tokio::test]
async fn test_translate_transport_failure_is_internal_error() {
    let (status, body) =
        post_json(setup_app(CLOSED_UPSTREAM), "/api/translate", r#"{"text":"hi"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("error sending request"));
}

#[tokio::test]
async fn test_generate_transport_failure_is_internal_error() {
    let (status, body) =
        post_json(setup_app(CLOSED_UPSTREAM), "/api/generate", r#"{"prompt":"hi"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("error sending request"));
}

// ── /health ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_health_makes_no_upstream_call() {
    let mut server = mockito::Server::new_async().await;
    let upstream = server
        .mock("POST", "/chat/completions")
        .expect(0)
        .create_async()
        .await;

    let req = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .expect("Failed to build request");
    let (status, body) = send(setup_app(&server.url()), req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "Server is running", "apiKeyConfigured": true}));
    upstream.assert_async().await;
}
