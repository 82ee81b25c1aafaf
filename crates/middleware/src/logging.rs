//! Logs each event in before() and the outcome in after(); always continues.

use async_trait::async_trait;
use hub_core::{HandlerResponse, InboundEvent, Middleware, Result};
use tracing::{debug, info, instrument};

pub struct LoggingMiddleware;

#[async_trait]
impl Middleware for LoggingMiddleware {
    #[instrument(skip(self, event))]
    async fn before(&self, event: &InboundEvent) -> Result<bool> {
        info!(
            chat_id = event.chat_id,
            is_button_click = event.is_button_click,
            text_len = event.user_text.len(),
            "Received event"
        );
        Ok(true)
    }

    #[instrument(skip(self, event, response))]
    async fn after(&self, event: &InboundEvent, response: &HandlerResponse) -> Result<()> {
        let outcome = match response {
            HandlerResponse::Reply(reply) => format!("reply ({} options)", reply.options.len()),
            other => format!("{:?}", other),
        };
        debug!(chat_id = event.chat_id, outcome = %outcome, "Processed event");
        Ok(())
    }
}
