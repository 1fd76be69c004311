use axum::{extract::rejection::JsonRejection, extract::State, Json};
use validator::Validate;

use crate::dtos::{QueryRequest, QueryResponse, QUERY_MISSING};
use crate::models::GenerationPayload;
use crate::services::{normalize_answer, NO_ANSWER_FALLBACK};
use crate::startup::AppState;
use service_core::error::AppError;

pub const API_KEY_MISSING: &str = "Gemini API key missing";
pub const GENERATION_FAILED: &str = "Failed to call Gemini API";

#[tracing::instrument(skip(state, payload))]
pub async fn get_ai_response(
    State(state): State<AppState>,
    payload: Result<Json<QueryRequest>, JsonRejection>,
) -> Result<Json<QueryResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection, "Rejected query body");
        AppError::BadRequest(anyhow::anyhow!(QUERY_MISSING))
    })?;
    request.validate()?;

    let provider = state
        .text_provider
        .as_ref()
        .ok_or_else(|| AppError::ConfigError(anyhow::anyhow!(API_KEY_MISSING)))?;

    let query = request.query.unwrap_or_default();
    let payload = GenerationPayload::for_query(&query, request.lang.as_deref());

    let response = provider.generate(&payload).await.map_err(|e| {
        tracing::error!(error = %e, "Generation request failed");
        AppError::UpstreamError(anyhow::anyhow!(GENERATION_FAILED))
    })?;

    tracing::info!(
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        has_answer = response.text.is_some(),
        "Generation completed"
    );

    let answer = normalize_answer(response.text.as_deref().unwrap_or(NO_ANSWER_FALLBACK));

    Ok(Json(QueryResponse::new(answer)))
}
