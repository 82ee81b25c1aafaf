//! Core types: inbound event, agent reply, handler response, and the Handler / Middleware traits.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One user action resolved from a platform update: who to answer and what they said.
///
/// `user_text` is the message text, or the label of the button that was pressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundEvent {
    pub chat_id: i64,
    pub user_text: String,
    pub is_button_click: bool,
}

impl InboundEvent {
    /// Builds an event, or `None` when the chat id is unset (zero) or the text is empty.
    pub fn new(chat_id: i64, user_text: impl Into<String>, is_button_click: bool) -> Option<Self> {
        let user_text = user_text.into();
        if chat_id == 0 || user_text.is_empty() {
            return None;
        }
        Some(Self {
            chat_id,
            user_text,
            is_button_click,
        })
    }
}

/// Converts a transport-specific update into an [`InboundEvent`]; `None` means nothing to answer.
pub trait ToInboundEvent: Send + Sync {
    fn to_event(&self) -> Option<InboundEvent>;
}

/// Text to show (HTML markup) plus quick-reply labels rendered as buttons.
///
/// Also the JSON shape the model is asked to produce: `{"text": "...", "options": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentReply {
    pub text: String,
    #[serde(default)]
    pub options: Vec<String>,
}

impl AgentReply {
    pub fn new<I, S>(text: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text: text.into(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }
}

/// Handler result for the chain. `Reply` carries the answer so middleware can see it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no reply.
    Stop,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain and answer with this reply.
    Reply(AgentReply),
}

/// Single handler step. The chain runs handlers in order until one returns Stop or Reply.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, _event: &InboundEvent) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
}

/// Runs around the handlers: `before` in order (false stops the chain), `after` in reverse.
#[async_trait]
pub trait Middleware: Send + Sync {
    async fn before(&self, _event: &InboundEvent) -> crate::error::Result<bool> {
        Ok(true)
    }

    async fn after(
        &self,
        _event: &InboundEvent,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}
