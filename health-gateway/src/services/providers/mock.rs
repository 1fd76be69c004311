//! Mock provider implementations for testing.

use super::{
    DeliveryReceipt, EmailMessage, EmailProvider, GenerationResponse, ProviderError, TextProvider,
};
use crate::models::GenerationPayload;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

enum MockReply {
    Answer(Option<String>),
    Fail(String),
}

/// Mock text provider returning a canned answer and recording every payload.
pub struct MockTextProvider {
    reply: MockReply,
    payloads: Mutex<Vec<GenerationPayload>>,
}

impl MockTextProvider {
    /// Responds with `text` as the first candidate.
    pub fn answering(text: impl Into<String>) -> Self {
        Self::with_reply(MockReply::Answer(Some(text.into())))
    }

    /// Responds successfully but without any candidate text.
    pub fn without_candidates() -> Self {
        Self::with_reply(MockReply::Answer(None))
    }

    /// Fails every call with a network error.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self::with_reply(MockReply::Fail(reason.into()))
    }

    fn with_reply(reply: MockReply) -> Self {
        Self {
            reply,
            payloads: Mutex::new(Vec::new()),
        }
    }

    pub fn payloads(&self) -> Vec<GenerationPayload> {
        self.payloads
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        payload: &GenerationPayload,
    ) -> Result<GenerationResponse, ProviderError> {
        if let Ok(mut payloads) = self.payloads.lock() {
            payloads.push(payload.clone());
        }

        match &self.reply {
            MockReply::Answer(text) => Ok(GenerationResponse {
                text: text.clone(),
                input_tokens: payload.prompt.len() as i32 / 4,
                output_tokens: text.as_ref().map_or(0, |t| t.len() as i32 / 4),
            }),
            MockReply::Fail(reason) => Err(ProviderError::NetworkError(reason.clone())),
        }
    }
}

/// Mock email provider for testing
pub struct MockEmailProvider {
    fail: bool,
    send_count: AtomicU64,
    sent: Mutex<Vec<EmailMessage>>,
}

impl MockEmailProvider {
    pub fn new(fail: bool) -> Self {
        Self {
            fail,
            send_count: AtomicU64::new(0),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn send_count(&self) -> u64 {
        self.send_count.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl EmailProvider for MockEmailProvider {
    async fn send(&self, email: &EmailMessage) -> Result<DeliveryReceipt, ProviderError> {
        if self.fail {
            return Err(ProviderError::SendFailed(
                "Mock relay rejected the message".to_string(),
            ));
        }

        let count = self.send_count.fetch_add(1, Ordering::SeqCst) + 1;
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(email.clone());
        }

        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            "[MOCK] Email would be sent"
        );

        Ok(DeliveryReceipt {
            provider_id: Some(format!("mock-email-{}", count)),
        })
    }
}
