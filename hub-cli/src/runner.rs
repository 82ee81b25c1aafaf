//! Update router: raw webhook body → event → handler chain → Bot. Every path ends in an [`Outcome`].

use std::sync::Arc;

use handler_chain::HandlerChain;
use hub_core::{Bot, HandlerResponse, HubError, InboundEvent, ToInboundEvent};
use hub_telegram::{TelegramUpdateWrapper, Update};
use llm_handlers::error_notice;
use tracing::{debug, error, info, instrument, warn};

use crate::components::{build_handler_chain, HubComponents};

/// How one update ended; mapped 1:1 to the webhook acknowledgment body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No chat id / text, or not an update at all.
    Ignored,
    /// Chain finished and any reply was delivered.
    Handled,
    /// Delivery or handling failed; an error notice was attempted.
    ErrorHandled,
    /// Processing detached from the acknowledgment.
    Accepted,
}

impl Outcome {
    pub fn ack(self) -> &'static str {
        match self {
            Outcome::Ignored => "Ignored",
            Outcome::Handled => "OK",
            Outcome::ErrorHandled => "Error Handled",
            Outcome::Accepted => "Accepted",
        }
    }
}

#[derive(Clone)]
pub struct UpdateRouter {
    chain: HandlerChain,
    bot: Arc<dyn Bot>,
}

impl UpdateRouter {
    pub fn new(chain: HandlerChain, bot: Arc<dyn Bot>) -> Self {
        Self { chain, bot }
    }

    /// Router with the production chain over the given components.
    pub fn from_components(components: &HubComponents) -> Self {
        Self::new(build_handler_chain(components), components.bot.clone())
    }

    /// Handles a raw webhook body. Bodies that are not an update JSON object are ignored.
    pub async fn handle_body(&self, body: &[u8]) -> Outcome {
        match serde_json::from_slice::<Update>(body) {
            Ok(update) => self.handle_update(&update).await,
            Err(e) => {
                debug!(error = %e, body_len = body.len(), "step: body is not an update, ignoring");
                Outcome::Ignored
            }
        }
    }

    #[instrument(skip(self, update), fields(update_id = ?update.update_id))]
    pub async fn handle_update(&self, update: &Update) -> Outcome {
        let Some(event) = TelegramUpdateWrapper(update).to_event() else {
            info!("step: no chat id or text, ignoring");
            return Outcome::Ignored;
        };
        self.dispatch(&event).await
    }

    async fn dispatch(&self, event: &InboundEvent) -> Outcome {
        let delivered = match self.chain.handle(event).await {
            Ok(HandlerResponse::Reply(reply)) => self.bot.send_reply(event.chat_id, &reply).await,
            Ok(other) => {
                debug!(response = ?other, "step: chain finished without reply");
                Ok(())
            }
            Err(e) => Err(e),
        };
        match delivered {
            Ok(()) => {
                info!(chat_id = event.chat_id, "step: reply delivered");
                Outcome::Handled
            }
            Err(e) => {
                error!(chat_id = event.chat_id, error = %e, "Handling failed, sending error notice");
                self.send_error_notice(event.chat_id, &e).await;
                Outcome::ErrorHandled
            }
        }
    }

    async fn send_error_notice(&self, chat_id: i64, err: &HubError) {
        let detail = match err {
            HubError::Delivery(msg) | HubError::Upstream(msg) | HubError::Config(msg) => msg.clone(),
            other => other.to_string(),
        };
        if let Err(e) = self.bot.send_reply(chat_id, &error_notice(&detail)).await {
            warn!(chat_id, error = %e, "Error notice not delivered either, giving up");
        }
    }
}
