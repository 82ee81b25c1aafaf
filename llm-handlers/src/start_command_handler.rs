//! Answers the start command with the fixed welcome, without contacting the model.

use async_trait::async_trait;
use hub_core::{Handler, HandlerResponse, InboundEvent, Result};
use tracing::info;

use crate::reply::{welcome_reply, START_COMMAND};

/// Replies with the welcome for an exact `/start`; every other event is ignored.
pub struct StartCommandHandler;

#[async_trait]
impl Handler for StartCommandHandler {
    async fn handle(&self, event: &InboundEvent) -> Result<HandlerResponse> {
        if event.user_text != START_COMMAND {
            return Ok(HandlerResponse::Ignore);
        }
        info!(chat_id = event.chat_id, "step: start command, sending welcome");
        Ok(HandlerResponse::Reply(welcome_reply()))
    }
}
