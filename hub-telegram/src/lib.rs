//! # hub-telegram
//!
//! Telegram layer: webhook update adapters, inline / reply keyboard layout, [`hub_core::Bot`]
//! implementation over teloxide, minimal config. No AI logic and no HTTP server here.

mod adapters;
mod bot_adapter;
mod config;
mod keyboard;

pub use adapters::{CallbackQuery, ChatRef, IncomingMessage, TelegramUpdateWrapper, Update, UpdateKind};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use keyboard::{button_rows, inline_keyboard, reply_menu_keyboard};
