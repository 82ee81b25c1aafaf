//! Unit tests for LoggingMiddleware.

use crate::LoggingMiddleware;
use hub_core::{AgentReply, HandlerResponse, InboundEvent, Middleware};

#[tokio::test]
async fn test_logging_middleware_before_continues() {
    let event = InboundEvent::new(1, "hello", false).unwrap();
    assert!(LoggingMiddleware.before(&event).await.unwrap());
}

#[tokio::test]
async fn test_logging_middleware_after_ok() {
    let event = InboundEvent::new(1, "hello", true).unwrap();
    let response = HandlerResponse::Reply(AgentReply::new("hi", ["Math"]));
    assert!(LoggingMiddleware.after(&event, &response).await.is_ok());
    assert!(LoggingMiddleware.after(&event, &HandlerResponse::Stop).await.is_ok());
}
