//! Config: server settings (always loadable) and secrets-bearing hub config. Loaded from env.

use hub_core::Result;
use hub_telegram::TelegramConfig;
use llm_client::EnvLlmConfig;
use std::env;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_WEBHOOK_PATH: &str = "/api/bot";

/// HTTP server settings. Never fails to load, so a server without secrets can still answer.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// LISTEN_ADDR
    pub listen_addr: String,
    /// WEBHOOK_PATH, always starting with '/'
    pub webhook_path: String,
    /// PUBLIC_URL; when unset the webhook URL is built from the Host header
    pub public_url: Option<String>,
    /// ACK_BEFORE_REPLY
    pub ack_before_reply: bool,
    /// LOG_FILE
    pub log_file: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            webhook_path: DEFAULT_WEBHOOK_PATH.to_string(),
            public_url: None,
            ack_before_reply: false,
            log_file: None,
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Ensures a leading '/' and no trailing '/' (except for the root path).
pub fn normalize_webhook_path(path: &str) -> String {
    let trimmed = path.trim().trim_matches('/');
    format!("/{}", trimmed)
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            listen_addr: non_empty_var("LISTEN_ADDR")
                .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string()),
            webhook_path: normalize_webhook_path(
                &non_empty_var("WEBHOOK_PATH").unwrap_or_else(|| DEFAULT_WEBHOOK_PATH.to_string()),
            ),
            public_url: non_empty_var("PUBLIC_URL"),
            ack_before_reply: non_empty_var("ACK_BEFORE_REPLY")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            log_file: non_empty_var("LOG_FILE"),
        }
    }

    /// Full webhook URL: PUBLIC_URL + path, else `https://{host}` + path.
    pub fn webhook_url(&self, host: Option<&str>) -> Option<String> {
        let base = match (&self.public_url, host) {
            (Some(public), _) => public.trim_end_matches('/').to_string(),
            (None, Some(host)) if !host.trim().is_empty() => format!("https://{}", host.trim()),
            _ => return None,
        };
        Some(format!("{}{}", base, self.webhook_path))
    }
}

/// Both secrets plus their provider settings. Missing either secret is a config error.
#[derive(Debug, Clone)]
pub struct HubConfig {
    pub telegram: TelegramConfig,
    pub llm: EnvLlmConfig,
}

impl HubConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            telegram: TelegramConfig::from_env()?,
            llm: EnvLlmConfig::from_env()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hub_core::HubError;
    use serial_test::serial;

    #[test]
    fn test_normalize_webhook_path() {
        assert_eq!(normalize_webhook_path("api/bot"), "/api/bot");
        assert_eq!(normalize_webhook_path("/api/bot/"), "/api/bot");
        assert_eq!(normalize_webhook_path("/"), "/");
    }

    #[test]
    fn test_webhook_url_prefers_public_url() {
        let mut config = ServerConfig::default();
        assert_eq!(
            config.webhook_url(Some("hub.example.com")).as_deref(),
            Some("https://hub.example.com/api/bot")
        );
        assert_eq!(config.webhook_url(None), None);

        config.public_url = Some("https://public.example.com/".to_string());
        assert_eq!(
            config.webhook_url(Some("ignored.example.com")).as_deref(),
            Some("https://public.example.com/api/bot")
        );
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" TRUE "));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("nope"));
    }

    #[test]
    #[serial]
    fn test_server_config_from_env() {
        env::set_var("LISTEN_ADDR", "127.0.0.1:8080");
        env::set_var("WEBHOOK_PATH", "hook");
        env::set_var("ACK_BEFORE_REPLY", "true");
        env::remove_var("PUBLIC_URL");
        env::remove_var("LOG_FILE");

        let config = ServerConfig::from_env();
        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.webhook_path, "/hook");
        assert!(config.ack_before_reply);
        assert!(config.public_url.is_none());

        env::remove_var("LISTEN_ADDR");
        env::remove_var("WEBHOOK_PATH");
        env::remove_var("ACK_BEFORE_REPLY");
    }

    #[test]
    #[serial]
    fn test_hub_config_requires_both_secrets() {
        for key in ["TELEGRAM_TOKEN", "BOT_TOKEN", "GEMINI_API_KEY", "TELEGRAM_API_URL", "TELOXIDE_API_URL"] {
            env::remove_var(key);
        }
        env::set_var("GEMINI_API_KEY", "test_key");
        assert!(matches!(HubConfig::from_env(), Err(HubError::Config(_))));

        env::remove_var("GEMINI_API_KEY");
        env::set_var("TELEGRAM_TOKEN", "123:abc");
        assert!(matches!(HubConfig::from_env(), Err(HubError::Config(_))));

        env::set_var("GEMINI_API_KEY", "test_key");
        let config = HubConfig::from_env().unwrap();
        assert_eq!(config.telegram.bot_token, "123:abc");
        assert_eq!(config.llm.gemini_api_key, "test_key");

        env::remove_var("TELEGRAM_TOKEN");
        env::remove_var("GEMINI_API_KEY");
    }
}
