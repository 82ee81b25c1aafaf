//! # LLM client abstraction
//!
//! Defines the [`LlmClient`] trait and a Gemini implementation. Transport-agnostic;
//! used by llm-handlers so the tutor handler can be tested without network access.

use async_trait::async_trait;
use hub_core::Result;

mod config;
mod gemini_llm;

pub use config::{EnvLlmConfig, LlmConfig};
pub use gemini_llm::GeminiLlmClient;

/// LLM client interface: one prompt in, raw model text out.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the model's text for `prompt`. Provider failures map to
    /// [`HubError::Upstream`](hub_core::HubError::Upstream).
    async fn complete(&self, prompt: &str) -> Result<String>;
}
