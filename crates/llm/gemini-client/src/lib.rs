//! # Gemini API client
//!
//! Thin reqwest wrapper around the Gemini `generateContent` endpoint (single request, no streaming).
//! Provides token masking for safe logging and a simple text-in / text-out API.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, instrument, warn};

/// Public Gemini REST base; `{base}/models/{model}:generateContent`.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model for tutoring answers.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 || !token.is_char_boundary(7) || !token.is_char_boundary(len - 4) {
        "***".to_string()
    } else {
        format!("{}***{}", &token[..7], &token[len - 4..])
    }
}

/// Failures of one `generateContent` call.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// Non-2xx answer. `message` is the provider's `error.message`, else the HTTP status text.
    #[error("Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// 2xx answer without a first candidate holding a text part.
    #[error("No candidate text in Gemini response")]
    EmptyCandidate,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest<'a> {
    pub contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Content<'a> {
    pub parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Part<'a> {
    pub text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    /// One content entry with one text part.
    pub fn from_text(text: &'a str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text }],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default, rename = "usageMetadata")]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UsageMetadata {
    #[serde(default, rename = "promptTokenCount")]
    prompt_token_count: u32,
    #[serde(default, rename = "candidatesTokenCount")]
    candidates_token_count: u32,
    #[serde(default, rename = "totalTokenCount")]
    total_token_count: u32,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl GenerateContentResponse {
    fn into_first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

/// Gemini client. Holds the API key (sent as `x-goog-api-key`, logged only masked) and the base URL.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Builds a client using the given API key and the public API base URL.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, GEMINI_API_BASE.to_string())
    }

    /// Builds a client with a custom base URL (e.g. for proxies or a mock server in tests).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    /// Sends `text` as the single prompt part and returns the first candidate's first text part.
    ///
    /// Logs masked API key, prompt length and token usage.
    #[instrument(skip(self, text))]
    pub async fn generate_content(&self, model: &str, text: &str) -> Result<String, GeminiError> {
        info!(
            model = %model,
            prompt_len = text.len(),
            api_key = %mask_token(&self.api_key),
            "Gemini generateContent request"
        );

        let response = self
            .client
            .post(self.endpoint(model))
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateContentRequest::from_text(text))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .ok()
                .and_then(|e| e.error.message)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown status").to_string());
            warn!(status = status.as_u16(), message = %message, "Gemini generateContent failed");
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse = response.json().await?;

        if let Some(ref u) = body.usage_metadata {
            info!(
                prompt_tokens = u.prompt_token_count,
                candidates_tokens = u.candidates_token_count,
                total_tokens = u.total_token_count,
                "Gemini generateContent usage"
            );
        }

        body.into_first_text().ok_or(GeminiError::EmptyCandidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let json = serde_json::to_value(GenerateContentRequest::from_text("hi")).unwrap();
        assert_eq!(json, serde_json::json!({ "contents": [{ "parts": [{ "text": "hi" }] }] }));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = GeminiClient::with_base_url("k".to_string(), "http://localhost:1/v1beta/".to_string());
        assert_eq!(
            client.endpoint("gemini-2.5-flash"),
            "http://localhost:1/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_first_text_missing_parts_is_none() {
        let body: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[]}}]}"#).unwrap();
        assert!(body.into_first_text().is_none());

        let body: GenerateContentResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(body.into_first_text().is_none());
    }
}
