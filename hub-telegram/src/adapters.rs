//! Adapters from Telegram webhook updates to hub_core types.
//!
//! Only the fields the router needs are modeled, all optional, so partial or unknown update
//! kinds still deserialize and are classified as [`UpdateKind::Unsupported`].

use hub_core::{InboundEvent, ToInboundEvent};
use serde::Deserialize;

/// One webhook delivery (simplified Telegram `Update`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Update {
    pub update_id: Option<i64>,
    pub message: Option<IncomingMessage>,
    pub callback_query: Option<CallbackQuery>,
}

/// Message carrying the chat and (for text messages) its text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IncomingMessage {
    pub chat: Option<ChatRef>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ChatRef {
    pub id: i64,
}

/// Press of an inline button; `data` is the button's callback data (its label).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackQuery {
    pub message: Option<IncomingMessage>,
    pub data: Option<String>,
}

/// Shape of an update as far as routing is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateKind<'a> {
    DirectMessage {
        chat_id: Option<i64>,
        text: Option<&'a str>,
    },
    ButtonCallback {
        chat_id: Option<i64>,
        data: Option<&'a str>,
    },
    Unsupported,
}

impl IncomingMessage {
    fn chat_id(&self) -> Option<i64> {
        self.chat.map(|c| c.id)
    }
}

impl Update {
    /// Classifies the update; a `message` takes precedence over a `callback_query`.
    pub fn kind(&self) -> UpdateKind<'_> {
        if let Some(msg) = &self.message {
            return UpdateKind::DirectMessage {
                chat_id: msg.chat_id(),
                text: msg.text.as_deref(),
            };
        }
        if let Some(cb) = &self.callback_query {
            return UpdateKind::ButtonCallback {
                chat_id: cb.message.as_ref().and_then(IncomingMessage::chat_id),
                data: cb.data.as_deref(),
            };
        }
        UpdateKind::Unsupported
    }
}

/// Wraps a webhook [`Update`] for conversion to core [`InboundEvent`].
pub struct TelegramUpdateWrapper<'a>(pub &'a Update);

impl<'a> ToInboundEvent for TelegramUpdateWrapper<'a> {
    fn to_event(&self) -> Option<InboundEvent> {
        match self.0.kind() {
            UpdateKind::DirectMessage { chat_id, text } => {
                InboundEvent::new(chat_id?, text?, false)
            }
            UpdateKind::ButtonCallback { chat_id, data } => {
                InboundEvent::new(chat_id?, data?, true)
            }
            UpdateKind::Unsupported => None,
        }
    }
}
