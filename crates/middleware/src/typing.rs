//! Sends a "typing" chat action before the handlers run.

use std::sync::Arc;

use async_trait::async_trait;
use hub_core::{Bot, InboundEvent, Middleware, Result};
use tracing::{debug, warn};

/// Shows the typing indicator in the event's chat. A failed chat action is logged and the chain continues.
pub struct TypingMiddleware {
    bot: Arc<dyn Bot>,
}

impl TypingMiddleware {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Middleware for TypingMiddleware {
    async fn before(&self, event: &InboundEvent) -> Result<bool> {
        match self.bot.send_typing(event.chat_id).await {
            Ok(()) => debug!(chat_id = event.chat_id, "step: typing sent"),
            Err(e) => warn!(chat_id = event.chat_id, error = %e, "Typing indicator failed, continuing"),
        }
        Ok(true)
    }
}
