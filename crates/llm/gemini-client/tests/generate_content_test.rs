//! HTTP-level tests for [`gemini_client::GeminiClient::generate_content`] against a mockito server.
//!
//! Covers: request path/header/body, first-candidate extraction, upstream error message vs status text,
//! and empty-candidate payloads. External interactions: local mock server only.

use gemini_client::{GeminiClient, GeminiError};
use mockito::Matcher;

const MODEL: &str = "gemini-2.5-flash";
const PATH: &str = "/models/gemini-2.5-flash:generateContent";

/// **Test: Request carries the key header and `{contents:[{parts:[{text}]}]}`; the first candidate text is returned.**
#[tokio::test]
async fn generate_content_returns_first_candidate_text() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_header("x-goog-api-key", "test-key")
        .match_body(Matcher::Json(serde_json::json!({
            "contents": [{ "parts": [{ "text": "What is photosynthesis?" }] }]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
            "candidates": [
                {"content": {"parts": [{"text": "first"}, {"text": "second"}], "role": "model"}},
                {"content": {"parts": [{"text": "other candidate"}], "role": "model"}}
            ],
            "usageMetadata": {"promptTokenCount": 5, "candidatesTokenCount": 2, "totalTokenCount": 7}
        }"#,
        )
        .create_async()
        .await;

    let client = GeminiClient::with_base_url("test-key".to_string(), server.url());
    let text = client
        .generate_content(MODEL, "What is photosynthesis?")
        .await
        .unwrap();

    assert_eq!(text, "first");
    mock.assert_async().await;
}

/// **Test: Non-2xx with an error envelope surfaces the provider's message.**
#[tokio::test]
async fn generate_content_api_error_uses_upstream_message() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", PATH)
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT"}}"#)
        .create_async()
        .await;

    let client = GeminiClient::with_base_url("bad-key".to_string(), server.url());
    let err = client.generate_content(MODEL, "hi").await.unwrap_err();

    match err {
        GeminiError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "API key not valid. Please pass a valid API key.");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

/// **Test: Non-2xx without a parseable envelope falls back to the HTTP status text.**
#[tokio::test]
async fn generate_content_api_error_falls_back_to_status_text() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", PATH)
        .with_status(503)
        .with_body("upstream unavailable")
        .create_async()
        .await;

    let client = GeminiClient::with_base_url("test-key".to_string(), server.url());
    let err = client.generate_content(MODEL, "hi").await.unwrap_err();

    match err {
        GeminiError::Api { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "Service Unavailable");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

/// **Test: 2xx without candidates (e.g. blocked prompt) is EmptyCandidate.**
#[tokio::test]
async fn generate_content_without_candidates_is_empty_candidate() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#)
        .create_async()
        .await;

    let client = GeminiClient::with_base_url("test-key".to_string(), server.url());
    let err = client.generate_content(MODEL, "hi").await.unwrap_err();

    assert!(matches!(err, GeminiError::EmptyCandidate));
}
