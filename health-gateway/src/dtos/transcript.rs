use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::ChatMessage;

pub const TRANSCRIPT_FIELDS_MISSING: &str = "Missing chatHistory or toEmail";

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptRequest {
    #[validate(required(message = "Missing chatHistory or toEmail"))]
    pub chat_history: Option<Vec<ChatMessage>>,
    #[validate(
        required(message = "Missing chatHistory or toEmail"),
        length(min = 1, message = "Missing chatHistory or toEmail")
    )]
    pub to_email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub success: bool,
    pub message: String,
}

impl TranscriptResponse {
    pub fn sent_to(to_email: &str) -> Self {
        Self {
            success: true,
            message: format!("Chat transcript sent to {}", to_email),
        }
    }
}
