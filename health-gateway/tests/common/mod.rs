#![allow(dead_code)]

use axum::{
    body::Body,
    extract::{Path, Query, State},
    http::{Request, StatusCode},
    routing::post,
    Json, Router,
};
use health_gateway::config::{GatewayConfig, GeminiConfig, SmtpConfig};
use health_gateway::startup::Application;
use secrecy::Secret;
use serde_json::Value;
use service_core::config::Config as CoreConfig;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tower::ServiceExt;

pub const TEST_MODEL: &str = "gemini-test";
pub const TEST_API_KEY: &str = "test-api-key";

pub fn gateway_config(gemini_api_base: &str, api_key: Option<&str>) -> GatewayConfig {
    GatewayConfig {
        common: CoreConfig { port: 0 },
        gemini: GeminiConfig {
            api_key: api_key.map(|key| Secret::new(key.to_string())),
            model: TEST_MODEL.to_string(),
            api_base: gemini_api_base.to_string(),
        },
        smtp: SmtpConfig {
            host: "smtp.test.local".to_string(),
            port: 587,
            credentials: None, // Transcript tests use the mock relay
            from_name: "Odisha Healthcare AI Bot".to_string(),
        },
    }
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn(config: GatewayConfig) -> Self {
        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        for _ in 0..50 {
            if client.get(&address).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            client,
        }
    }

    pub async fn ask(&self, body: &Value) -> reqwest::Response {
        self.client
            .post(format!("{}/get-ai-response", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to send request")
    }
}

/// A request the stub Gemini endpoint received.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub action: String,
    pub key: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    reply: Value,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Local stand-in for the Gemini `generateContent` endpoint.
pub struct StubGemini {
    pub api_base: String,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl StubGemini {
    pub async fn spawn(status: StatusCode, reply: Value) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            status,
            reply,
            requests: requests.clone(),
        };

        let app = Router::new()
            .route("/v1beta/models/:action", post(stub_generate))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub Gemini listener");
        let port = listener.local_addr().unwrap().port();

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        StubGemini {
            api_base: format!("http://127.0.0.1:{}/v1beta", port),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn stub_generate(
    State(state): State<StubState>,
    Path(action): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.requests.lock().unwrap().push(CapturedRequest {
        action,
        key: params.get("key").cloned(),
        body,
    });

    (state.status, Json(state.reply.clone()))
}

/// Drive a router once and decode the JSON response.
pub async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).expect("response body is JSON");

    (status, json)
}
