use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

use crate::startup::AppState;

pub const LIVENESS_MESSAGE: &str = "Odisha Healthcare AI Server running";

pub async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

/// Reports which outbound capabilities were configured at start-up.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "health-gateway",
        "version": env!("CARGO_PKG_VERSION"),
        "generation": state.text_provider.is_some(),
        "email": state.email_provider.is_some()
    }))
}
