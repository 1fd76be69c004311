//! Router-level tests for `POST /get-ai-response` against a mock generator.

mod common;

use axum::http::StatusCode;
use common::post_json;
use health_gateway::models::SYSTEM_INSTRUCTION;
use health_gateway::services::MockTextProvider;
use health_gateway::startup::{build_router, AppState};
use serde_json::json;
use std::sync::Arc;

fn state_with(provider: Arc<MockTextProvider>) -> AppState {
    AppState::default().with_text_provider(provider)
}

#[tokio::test]
async fn missing_query_is_rejected() {
    let provider = Arc::new(MockTextProvider::answering("unused"));
    let app = build_router(state_with(provider.clone()));

    let (status, body) = post_json(app, "/get-ai-response", r#"{"lang":"en"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"success": false, "error": "Query missing"}));
    assert!(provider.payloads().is_empty());
}

#[tokio::test]
async fn empty_or_malformed_body_is_rejected() {
    let provider = Arc::new(MockTextProvider::answering("unused"));

    for raw in [r#"{"query":""}"#, "not json", r#"{"query": 42}"#] {
        let app = build_router(state_with(provider.clone()));
        let (status, body) = post_json(app, "/get-ai-response", raw).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", raw);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Query missing");
    }
}

#[tokio::test]
async fn missing_api_key_fails_with_500() {
    let app = build_router(AppState::default());

    let (status, body) = post_json(
        app,
        "/get-ai-response",
        r#"{"query":"How to prevent malaria?","lang":"en"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"success": false, "error": "Gemini API key missing"}));
}

#[tokio::test]
async fn missing_query_wins_over_missing_api_key() {
    let app = build_router(AppState::default());

    let (status, _) = post_json(app, "/get-ai-response", "{}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn returns_first_candidate_text() {
    let provider = Arc::new(MockTextProvider::answering("Drink clean water."));
    let app = build_router(state_with(provider.clone()));

    let (status, body) = post_json(
        app,
        "/get-ai-response",
        r#"{"query":"How to avoid diarrhoea?","lang":"en"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "answer": "Drink clean water."}));

    let payloads = provider.payloads();
    assert_eq!(payloads.len(), 1);
    assert_eq!(payloads[0].prompt, "[en] How to avoid diarrhoea?");
    assert_eq!(payloads[0].system_instruction, SYSTEM_INSTRUCTION);
}

#[tokio::test]
async fn no_candidates_is_a_successful_fallback() {
    let provider = Arc::new(MockTextProvider::without_candidates());
    let app = build_router(state_with(provider));

    let (status, body) = post_json(app, "/get-ai-response", r#"{"query":"?","lang":"or"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "answer": "No answer received"}));
}

#[tokio::test]
async fn answer_is_normalized() {
    let provider = Arc::new(MockTextProvider::answering(
        "## Tips\n* **Sleep** 8 hours.\n* Eat   greens.",
    ));
    let app = build_router(state_with(provider));

    let (status, body) = post_json(app, "/get-ai-response", r#"{"query":"habits"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["answer"], "Tips Sleep 8 hours. Eat greens.");
}

#[tokio::test]
async fn upstream_failure_is_reported_not_propagated() {
    let provider = Arc::new(MockTextProvider::failing("connection reset"));
    let app = build_router(state_with(provider));

    let (status, body) = post_json(app, "/get-ai-response", r#"{"query":"fever"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"success": false, "error": "Failed to call Gemini API"}));
}

#[tokio::test]
async fn missing_lang_sends_bare_query() {
    let provider = Arc::new(MockTextProvider::answering("ok"));
    let app = build_router(state_with(provider.clone()));

    let (status, _) = post_json(app, "/get-ai-response", r#"{"query":"cough"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(provider.payloads()[0].prompt, "cough");
}

#[tokio::test]
async fn blank_lang_sends_bare_query() {
    let provider = Arc::new(MockTextProvider::answering("ok"));
    let app = build_router(state_with(provider.clone()));

    let (status, body) = post_json(app, "/get-ai-response", r#"{"query":"x","lang":"  "}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "answer": "ok"}));
    assert_eq!(provider.payloads()[0].prompt, "x");
}
