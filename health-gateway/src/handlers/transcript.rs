use axum::{extract::rejection::JsonRejection, extract::State, Json};
use validator::Validate;

use crate::dtos::{TranscriptRequest, TranscriptResponse, TRANSCRIPT_FIELDS_MISSING};
use crate::services::{render_transcript, EmailMessage, TRANSCRIPT_SUBJECT};
use crate::startup::AppState;
use service_core::error::AppError;

pub const EMAIL_CREDENTIALS_MISSING: &str = "Email credentials missing";
pub const SEND_FAILED: &str = "Failed to send email";

#[tracing::instrument(skip(state, payload))]
pub async fn send_chat(
    State(state): State<AppState>,
    payload: Result<Json<TranscriptRequest>, JsonRejection>,
) -> Result<Json<TranscriptResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection, "Rejected transcript body");
        AppError::BadRequest(anyhow::anyhow!(TRANSCRIPT_FIELDS_MISSING))
    })?;
    request.validate()?;

    let chat_history = request.chat_history.unwrap_or_default();
    let to_email = request.to_email.unwrap_or_default();

    let provider = state
        .email_provider
        .as_ref()
        .ok_or_else(|| AppError::ConfigError(anyhow::anyhow!(EMAIL_CREDENTIALS_MISSING)))?;

    let body_html = render_transcript(&chat_history).map_err(|e| {
        AppError::InternalError(anyhow::anyhow!("Failed to render transcript: {}", e))
    })?;

    let email = EmailMessage {
        to: to_email.clone(),
        subject: TRANSCRIPT_SUBJECT.to_string(),
        body_html,
    };

    match provider.send(&email).await {
        Ok(receipt) => {
            tracing::info!(
                messages = chat_history.len(),
                provider_id = ?receipt.provider_id,
                "Chat transcript sent"
            );
            Ok(Json(TranscriptResponse::sent_to(&to_email)))
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to send chat transcript");
            Err(AppError::UpstreamError(anyhow::anyhow!(SEND_FAILED)))
        }
    }
}
