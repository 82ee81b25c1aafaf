//! # hub-core
//!
//! Core types and traits for the study hub bot: [`Bot`], [`Handler`], [`Middleware`],
//! [`InboundEvent`] and [`AgentReply`], plus tracing initialization. Transport-agnostic;
//! used by hub-telegram, handler-chain and llm-handlers.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{HubError, ModelOutputError, Result};
pub use logger::init_tracing;
pub use types::{
    AgentReply, Handler, HandlerResponse, InboundEvent, Middleware, ToInboundEvent,
};
