//! LLM configuration: trait and env-based implementation.

use gemini_client::{DEFAULT_MODEL, GEMINI_API_BASE};
use hub_core::{HubError, Result};
use std::env;

/// LLM configuration interface for the Gemini API.
pub trait LlmConfig: Send + Sync {
    fn api_key(&self) -> &str;
    fn base_url(&self) -> &str;
    fn model(&self) -> &str;
}

/// LLM config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvLlmConfig {
    pub gemini_api_key: String,
    pub gemini_api_url: String,
    pub gemini_model: String,
}

impl LlmConfig for EnvLlmConfig {
    fn api_key(&self) -> &str {
        &self.gemini_api_key
    }
    fn base_url(&self) -> &str {
        &self.gemini_api_url
    }
    fn model(&self) -> &str {
        &self.gemini_model
    }
}

impl EnvLlmConfig {
    /// Load from environment variables: GEMINI_API_KEY required; GEMINI_API_URL, GEMINI_MODEL optional.
    pub fn from_env() -> Result<Self> {
        let gemini_api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| HubError::Config("GEMINI_API_KEY not set".to_string()))?;
        let gemini_api_url = env::var("GEMINI_API_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| GEMINI_API_BASE.to_string());
        let gemini_model = env::var("GEMINI_MODEL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        Ok(Self {
            gemini_api_key,
            gemini_api_url,
            gemini_model,
        })
    }
}
