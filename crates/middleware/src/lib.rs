//! Middleware for the handler chain: typing indicator and event logging.

mod logging;
mod typing;

pub use logging::LoggingMiddleware;
pub use typing::TypingMiddleware;

#[cfg(test)]
mod test;
