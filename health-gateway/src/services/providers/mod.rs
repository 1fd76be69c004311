//! Outbound capability abstractions and their implementations.
//!
//! Handlers only see the `TextProvider` and `EmailProvider` traits, so the
//! Gemini and SMTP backends can be swapped for mocks in tests.

pub mod email;
pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::GenerationPayload;

pub use email::SmtpProvider;
pub use gemini::GeminiTextProvider;
pub use mock::{MockEmailProvider, MockTextProvider};

/// Error type for provider operations.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Invalid recipient: {0}")]
    InvalidRecipient(String),

    #[error("Send error: {0}")]
    SendFailed(String),
}

/// Result of one generation call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationResponse {
    /// Text of the first part of the first candidate, when present.
    pub text: Option<String>,

    /// Input tokens consumed.
    pub input_tokens: i32,

    /// Output tokens generated.
    pub output_tokens: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body_html: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub provider_id: Option<String>,
}

/// Trait for text generation backends (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Issue a single generation request and wait for its answer.
    async fn generate(
        &self,
        payload: &GenerationPayload,
    ) -> Result<GenerationResponse, ProviderError>;
}

/// Trait for outbound mail relays (e.g., SMTP).
#[async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(&self, email: &EmailMessage) -> Result<DeliveryReceipt, ProviderError>;
}
