//! # Handler chain
//!
//! Runs a sequence of middleware (before/after) and handlers for each inbound event. Middleware can stop
//! the chain; the first handler that returns Stop or Reply ends handler execution; after callbacks run in reverse order.

use hub_core::{Handler, HandlerResponse, InboundEvent, Middleware, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Chain of middleware and handlers: middleware run in order (before), then handlers; middleware after run in reverse order.
#[derive(Clone, Default)]
pub struct HandlerChain {
    middleware: Vec<Arc<dyn Middleware>>,
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain (no middleware, no handlers).
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a middleware (runs before handlers, after in reverse).
    pub fn add_middleware(mut self, middleware: Arc<dyn Middleware>) -> Self {
        self.middleware.push(middleware);
        self
    }

    /// Appends a handler (runs in order; first Stop/Reply ends handler phase).
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Runs middleware before, then handlers; then middleware after in reverse. Returns first Stop or Reply, or Continue.
    #[instrument(skip(self, event), fields(chat_id = event.chat_id))]
    pub async fn handle(&self, event: &InboundEvent) -> Result<HandlerResponse> {
        let mut final_response = HandlerResponse::Continue;

        info!(
            chat_id = event.chat_id,
            is_button_click = event.is_button_click,
            "step: handler_chain started"
        );

        // Run all middleware before; if any returns false, stop and return Stop.
        for mw in &self.middleware {
            let mw_name = std::any::type_name_of_val(mw.as_ref());
            info!(chat_id = event.chat_id, middleware = %mw_name, "step: middleware before");
            if !mw.before(event).await? {
                info!(
                    chat_id = event.chat_id,
                    middleware = %mw_name,
                    "step: middleware before returned false, chain stopped"
                );
                return Ok(HandlerResponse::Stop);
            }
        }

        for handler in &self.handlers {
            let handler_name = std::any::type_name_of_val(handler.as_ref());
            info!(chat_id = event.chat_id, handler = %handler_name, "step: handler processing");
            let response = handler.handle(event).await?;
            debug!(handler = %handler_name, response = ?response, "Handler processed");
            let (response_type, option_count) = match &response {
                HandlerResponse::Continue => ("Continue", None),
                HandlerResponse::Stop => ("Stop", None),
                HandlerResponse::Ignore => ("Ignore", None),
                HandlerResponse::Reply(reply) => ("Reply", Some(reply.options.len())),
            };
            info!(
                chat_id = event.chat_id,
                handler = %handler_name,
                response_type = %response_type,
                option_count = ?option_count,
                "step: handler done"
            );

            match response {
                HandlerResponse::Stop | HandlerResponse::Reply(_) => {
                    final_response = response;
                    break;
                }
                HandlerResponse::Continue | HandlerResponse::Ignore => continue,
            }
        }

        // Run middleware after in reverse order (last added runs first here).
        for mw in self.middleware.iter().rev() {
            let mw_name = std::any::type_name_of_val(mw.as_ref());
            info!(chat_id = event.chat_id, middleware = %mw_name, "step: middleware after");
            mw.after(event, &final_response).await?;
        }

        info!(chat_id = event.chat_id, "step: handler_chain finished");

        Ok(final_response)
    }
}

// Unit/integration tests live in tests/handler_chain_test.rs
