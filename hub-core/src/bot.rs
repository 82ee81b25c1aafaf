//! Bot abstraction for the outbound side of one update cycle.
//!
//! [`Bot`] is transport-agnostic; hub-telegram implements it via teloxide. Tests substitute
//! recording fakes.

use crate::error::Result;
use crate::types::AgentReply;
use async_trait::async_trait;

/// Outbound chat calls: typing indicator, rendered reply, webhook registration.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Shows the transient "typing" indicator in the chat.
    async fn send_typing(&self, chat_id: i64) -> Result<()>;
    /// Renders `reply` (HTML text + button grid) into one outgoing message.
    /// Fails with [`HubError::Delivery`](crate::HubError::Delivery) when the platform rejects it.
    async fn send_reply(&self, chat_id: i64, reply: &AgentReply) -> Result<()>;
    /// Points the platform's update delivery at `url`.
    async fn set_webhook(&self, url: &str) -> Result<()>;
}
