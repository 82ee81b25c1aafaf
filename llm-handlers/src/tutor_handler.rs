//! AI tutor: turns the student's text into an instruction, asks the model, and parses the answer.
//!
//! Never fails the chain: upstream errors and unusable model output both become fixed replies.

use std::sync::Arc;

use async_trait::async_trait;
use hub_core::{AgentReply, Handler, HandlerResponse, InboundEvent, Result};
use llm_client::LlmClient;
use tracing::{info, instrument, warn};

use crate::reply::{parse_agent_reply, prose_fallback, upstream_fallback};

pub struct TutorHandler {
    llm_client: Arc<dyn LlmClient>,
}

impl TutorHandler {
    pub fn new(llm_client: Arc<dyn LlmClient>) -> Self {
        Self { llm_client }
    }

    /// One model round trip for `query`, with both fallbacks applied.
    #[instrument(skip(self, query), fields(query_len = query.len()))]
    pub async fn complete(&self, query: &str) -> AgentReply {
        let instruction = prompt::tutor_instruction(query);
        let raw = match self.llm_client.complete(&instruction).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "step: model call failed, using upstream fallback");
                return upstream_fallback();
            }
        };
        match parse_agent_reply(&raw) {
            Ok(reply) => {
                info!(options = reply.options.len(), "step: model reply parsed");
                reply
            }
            Err(e) => {
                warn!(error = %e, raw_len = raw.len(), "step: model output not reply JSON, using prose fallback");
                prose_fallback(&raw)
            }
        }
    }
}

#[async_trait]
impl Handler for TutorHandler {
    async fn handle(&self, event: &InboundEvent) -> Result<HandlerResponse> {
        Ok(HandlerResponse::Reply(self.complete(&event.user_text).await))
    }
}
