//! Gemini 实现的 LlmClient：包装 gemini-client，固定模型名。

use async_trait::async_trait;
use gemini_client::{GeminiClient, GeminiError, DEFAULT_MODEL};
use hub_core::{HubError, Result};
use tracing::instrument;

use super::{LlmClient, LlmConfig};

/// 基于 gemini-client 的 LlmClient 实现。
#[derive(Debug, Clone)]
pub struct GeminiLlmClient {
    client: GeminiClient,
    model: String,
}

impl GeminiLlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: GeminiClient::new(api_key),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: GeminiClient::with_base_url(api_key, base_url),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    /// 按配置构造（API key、base URL、模型）。
    pub fn from_config(config: &dyn LlmConfig) -> Self {
        Self::with_base_url(config.api_key().to_string(), config.base_url().to_string())
            .with_model(config.model().to_string())
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

fn to_upstream(e: GeminiError) -> HubError {
    match e {
        GeminiError::Api { message, .. } => HubError::Upstream(message),
        other => HubError::Upstream(other.to_string()),
    }
}

#[async_trait]
impl LlmClient for GeminiLlmClient {
    #[instrument(skip(self, prompt))]
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.client
            .generate_content(&self.model, prompt)
            .await
            .map_err(to_upstream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_and_custom_model() {
        let client = GeminiLlmClient::new("k".to_string());
        assert_eq!(client.model(), DEFAULT_MODEL);
        let client = client.with_model("gemini-1.5-flash".to_string());
        assert_eq!(client.model(), "gemini-1.5-flash");
    }

    #[test]
    fn test_api_error_maps_to_upstream_message() {
        let err = to_upstream(GeminiError::Api {
            status: 429,
            message: "Resource has been exhausted".to_string(),
        });
        assert!(matches!(err, HubError::Upstream(ref m) if m == "Resource has been exhausted"));

        let err = to_upstream(GeminiError::EmptyCandidate);
        assert!(matches!(err, HubError::Upstream(ref m) if m.contains("No candidate")));
    }
}
