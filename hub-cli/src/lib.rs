//! # hub-cli
//!
//! Study Hub webhook server: CLI parsing, config loading, component assembly, update routing, axum routes.

pub mod cli;
pub mod components;
pub mod config;
pub mod runner;
pub mod server;

pub use cli::{Cli, Commands};
pub use components::{build_components, build_handler_chain, HubComponents};
pub use config::{HubConfig, ServerConfig};
pub use runner::{Outcome, UpdateRouter};
pub use server::{build_app, serve, AppContext, AppState};
