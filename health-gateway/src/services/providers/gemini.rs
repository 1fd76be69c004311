//! Gemini text provider.
//!
//! Sends one non-streaming `generateContent` request per query.

use super::{GenerationResponse, ProviderError, TextProvider};
use crate::models::GenerationPayload;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

/// Gemini text provider.
pub struct GeminiTextProvider {
    api_key: Secret<String>,
    model: String,
    api_base: String,
    client: Client,
}

impl GeminiTextProvider {
    pub fn new(
        api_key: Secret<String>,
        model: impl Into<String>,
        api_base: impl Into<String>,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder().build().map_err(|e| {
            ProviderError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;
        let api_base: String = api_base.into();

        Ok(Self {
            api_key,
            model: model.into(),
            api_base: api_base.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Build the API URL for the configured model and the given method.
    /// The key travels as a query parameter and is never part of this string.
    fn api_url(&self, method: &str) -> String {
        format!("{}/models/{}:{}", self.api_base, self.model, method)
    }
}

#[async_trait]
impl TextProvider for GeminiTextProvider {
    async fn generate(
        &self,
        payload: &GenerationPayload,
    ) -> Result<GenerationResponse, ProviderError> {
        let request = GenerateContentRequest::from_payload(payload);
        let url = self.api_url("generateContent");

        tracing::debug!(
            model = %self.model,
            prompt_len = payload.prompt.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.expose_secret().as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError(e.without_url().to_string()))?;

        let api_response = parse_reply(status, &body)?;
        if !status.is_success() {
            tracing::warn!(status = %status, body = %body, "Gemini API returned an error status");
        }

        let usage = api_response.usage_metadata.clone().unwrap_or_default();

        tracing::debug!(
            model = %self.model,
            candidates = api_response.candidates.len(),
            finish_reason = ?api_response.candidates.first().and_then(|c| c.finish_reason.as_deref()),
            "Gemini API responded"
        );

        Ok(GenerationResponse {
            text: api_response.first_text(),
            input_tokens: usage.prompt_token_count.unwrap_or(0),
            output_tokens: usage.candidates_token_count.unwrap_or(0),
        })
    }
}

/// Decode a `generateContent` reply.
///
/// Any JSON object decodes, including Gemini's `{"error": ...}` envelope on a
/// non-2xx status; such a reply carries no candidates. Only a body that does
/// not decode is a failure.
fn parse_reply(status: StatusCode, body: &str) -> Result<GenerateContentResponse, ProviderError> {
    match serde_json::from_str(body) {
        Ok(reply) => Ok(reply),
        Err(e) if status.is_success() => Err(ProviderError::ApiError(format!(
            "Failed to parse response: {}",
            e
        ))),
        Err(_) if status == StatusCode::TOO_MANY_REQUESTS => Err(ProviderError::RateLimited),
        Err(_) => Err(ProviderError::ApiError(format!(
            "Gemini API error {}: {}",
            status, body
        ))),
    }
}

// Gemini API request/response types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: Content<'a>,
}

impl<'a> GenerateContentRequest<'a> {
    fn from_payload(payload: &'a GenerationPayload) -> Self {
        Self {
            contents: vec![Content::text(&payload.prompt)],
            system_instruction: Content::text(payload.system_instruction),
        }
    }
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

impl<'a> Content<'a> {
    fn text(text: &'a str) -> Self {
        Self {
            parts: vec![RequestPart { text }],
        }
    }
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
}

impl GenerateContentResponse {
    /// `candidates[0].content.parts[0].text`, treating an empty string as absent.
    fn first_text(&self) -> Option<String> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|content| content.parts.first())
            .and_then(|part| part.text.clone())
            .filter(|text| !text.is_empty())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    prompt_token_count: Option<i32>,
    candidates_token_count: Option<i32>,
}
