//! Wraps teloxide::Bot and implements [`hub_core::Bot`]. Production code talks to Telegram; tests can
//! point the adapter at a mock server via [`TelegramConfig::telegram_api_url`] or substitute another Bot impl.

use async_trait::async_trait;
use hub_core::{AgentReply, Bot as CoreBot, HubError, Result};
use teloxide::{
    prelude::*,
    types::{ChatAction, ChatId, ParseMode, ReplyMarkup},
};
use tracing::{debug, instrument};

use crate::config::TelegramConfig;
use crate::keyboard::{inline_keyboard, reply_menu_keyboard};

fn delivery(e: teloxide::RequestError) -> HubError {
    HubError::Delivery(e.to_string())
}

/// Thin wrapper around teloxide::Bot that implements hub-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
    reply_menu: Vec<String>,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot, without a persistent menu.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self {
            bot,
            reply_menu: Vec::new(),
        }
    }

    /// Builds the teloxide Bot from config (token, optional API URL) and applies the reply menu.
    pub fn from_config(config: &TelegramConfig) -> Self {
        let bot = teloxide::Bot::new(config.bot_token.clone());
        let bot = match config.telegram_api_url.clone() {
            Some(url) => bot.set_api_url(url),
            None => bot,
        };
        Self::new(bot).with_reply_menu(config.reply_menu.clone())
    }

    /// Labels of the persistent reply keyboard, shown when a reply has no inline options.
    pub fn with_reply_menu(mut self, labels: Vec<String>) -> Self {
        self.reply_menu = labels;
        self
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }

    /// Telegram takes one `reply_markup` per message: the inline grid wins over the menu.
    fn markup_for(&self, reply: &AgentReply) -> Option<ReplyMarkup> {
        inline_keyboard(&reply.options)
            .map(ReplyMarkup::InlineKeyboard)
            .or_else(|| reply_menu_keyboard(&self.reply_menu).map(ReplyMarkup::Keyboard))
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_typing(&self, chat_id: i64) -> Result<()> {
        self.bot
            .send_chat_action(ChatId(chat_id), ChatAction::Typing)
            .await
            .map_err(delivery)?;
        Ok(())
    }

    #[instrument(skip(self, reply), fields(options = reply.options.len()))]
    async fn send_reply(&self, chat_id: i64, reply: &AgentReply) -> Result<()> {
        let mut request = self
            .bot
            .send_message(ChatId(chat_id), reply.text.clone())
            .parse_mode(ParseMode::Html);
        if let Some(markup) = self.markup_for(reply) {
            request = request.reply_markup(markup);
        }
        let sent = request.await.map_err(delivery)?;
        debug!(message_id = %sent.id, "step: sendMessage ok");
        Ok(())
    }

    async fn set_webhook(&self, url: &str) -> Result<()> {
        let url = reqwest::Url::parse(url)
            .map_err(|e| HubError::Config(format!("Invalid webhook URL {}: {}", url, e)))?;
        self.bot.set_webhook(url).await.map_err(delivery)?;
        Ok(())
    }
}
