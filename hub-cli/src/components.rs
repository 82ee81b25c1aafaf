//! Builds the Bot, the LLM client and the handler chain from config.

use std::sync::Arc;

use handler_chain::HandlerChain;
use hub_core::Bot;
use hub_telegram::TelegramBotAdapter;
use llm_client::{GeminiLlmClient, LlmClient};
use llm_handlers::{StartCommandHandler, TutorHandler};
use middleware::{LoggingMiddleware, TypingMiddleware};
use tracing::{info, instrument};

use crate::config::HubConfig;

/// Shared, stateless collaborators for one running server.
#[derive(Clone)]
pub struct HubComponents {
    pub bot: Arc<dyn Bot>,
    pub llm_client: Arc<dyn LlmClient>,
}

#[instrument(skip(config))]
pub fn build_components(config: &HubConfig) -> HubComponents {
    let adapter = TelegramBotAdapter::from_config(&config.telegram);
    let llm = GeminiLlmClient::from_config(&config.llm);
    info!(
        model = %llm.model(),
        custom_telegram_api = config.telegram.telegram_api_url.is_some(),
        reply_menu = config.telegram.reply_menu.len(),
        "step: components built"
    );
    HubComponents {
        bot: Arc::new(adapter),
        llm_client: Arc::new(llm),
    }
}

/// Chain: logging, typing indicator, then `/start` before the AI tutor.
pub fn build_handler_chain(components: &HubComponents) -> HandlerChain {
    HandlerChain::new()
        .add_middleware(Arc::new(LoggingMiddleware))
        .add_middleware(Arc::new(TypingMiddleware::new(components.bot.clone())))
        .add_handler(Arc::new(StartCommandHandler))
        .add_handler(Arc::new(TutorHandler::new(components.llm_client.clone())))
}
