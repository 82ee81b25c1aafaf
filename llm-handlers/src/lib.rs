//! Handlers answering one event: the fixed welcome for `/start`, the AI tutor for everything else.

mod reply;
mod start_command_handler;
mod tutor_handler;

pub use reply::{
    error_notice, parse_agent_reply, prose_fallback, upstream_fallback, welcome_reply,
    MAX_OPTIONS, START_COMMAND,
};
pub use start_command_handler::StartCommandHandler;
pub use tutor_handler::TutorHandler;
