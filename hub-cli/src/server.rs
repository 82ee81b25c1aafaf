//! Webhook HTTP server (axum). GET on the webhook path registers the webhook, POST receives updates.
//! Any other method on the path gets 405 from the method router.

use std::sync::Arc;

use anyhow::Context;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use hub_core::{Bot, HubError};
use serde_json::json;
use tracing::{error, info, instrument};

use crate::components::{build_components, HubComponents};
use crate::config::{HubConfig, ServerConfig};
use crate::runner::{Outcome, UpdateRouter};

/// Everything a configured server needs per request.
pub struct AppContext {
    router: UpdateRouter,
    bot: Arc<dyn Bot>,
    server: ServerConfig,
}

impl AppContext {
    pub fn new(components: &HubComponents, server: ServerConfig) -> Self {
        Self {
            router: UpdateRouter::from_components(components),
            bot: components.bot.clone(),
            server,
        }
    }
}

/// Either ready to serve, or answering every webhook request with a configuration error.
#[derive(Clone)]
pub enum AppState {
    Ready(Arc<AppContext>),
    Misconfigured(Arc<str>),
}

impl AppState {
    pub fn ready(context: AppContext) -> Self {
        AppState::Ready(Arc::new(context))
    }

    /// Loads secrets from env; a config error yields [`AppState::Misconfigured`] instead of failing startup.
    pub fn from_env(server: &ServerConfig) -> Self {
        match HubConfig::from_env() {
            Ok(config) => Self::ready(AppContext::new(&build_components(&config), server.clone())),
            Err(e) => {
                error!(error = %e, "Secrets missing or invalid, serving configuration errors");
                let detail = match e {
                    HubError::Config(msg) => msg,
                    other => other.to_string(),
                };
                AppState::Misconfigured(detail.into())
            }
        }
    }

    fn context(&self) -> Result<Arc<AppContext>, Response> {
        match self {
            AppState::Ready(ctx) => Ok(ctx.clone()),
            AppState::Misconfigured(detail) => Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": format!("Server Configuration Error. {}", detail) })),
            )
                .into_response()),
        }
    }
}

pub fn build_app(state: AppState, webhook_path: &str) -> Router {
    Router::new()
        .route(webhook_path, get(register_webhook).post(receive_update))
        .with_state(state)
}

#[instrument(skip(state, body), fields(body_len = body.len()))]
async fn receive_update(State(state): State<AppState>, body: Bytes) -> Response {
    let ctx = match state.context() {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };
    if ctx.server.ack_before_reply {
        let router = ctx.router.clone();
        tokio::spawn(async move {
            let outcome = router.handle_body(&body).await;
            info!(outcome = outcome.ack(), "step: detached update finished");
        });
        return (StatusCode::OK, Outcome::Accepted.ack()).into_response();
    }
    let outcome = ctx.router.handle_body(&body).await;
    (StatusCode::OK, outcome.ack()).into_response()
}

#[instrument(skip(state, headers))]
async fn register_webhook(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let ctx = match state.context() {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };
    let host = headers.get(header::HOST).and_then(|v| v.to_str().ok());
    let Some(url) = ctx.server.webhook_url(host) else {
        return set_webhook_failed("No Host header and PUBLIC_URL not set".to_string());
    };
    match ctx.bot.set_webhook(&url).await {
        Ok(()) => {
            info!(url = %url, "step: webhook set");
            (
                StatusCode::OK,
                Json(json!({ "status": "Webhook Set", "detail": { "ok": true, "url": url } })),
            )
                .into_response()
        }
        Err(e) => {
            error!(url = %url, error = %e, "setWebhook failed");
            set_webhook_failed(e.to_string())
        }
    }
}

fn set_webhook_failed(details: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Failed to set webhook", "details": details })),
    )
        .into_response()
}

/// Binds `addr` and serves until the process is stopped.
pub async fn serve(server: ServerConfig, addr: &str) -> anyhow::Result<()> {
    let path = server.webhook_path.clone();
    let state = AppState::from_env(&server);
    let app = build_app(state, &path);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!(addr = %addr, path = %path, "Webhook server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
