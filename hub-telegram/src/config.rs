//! Telegram 接入最小配置：token、API URL、常驻菜单。
//! 与外部交互：从环境变量 TELEGRAM_TOKEN（或 BOT_TOKEN）、TELEGRAM_API_URL（或 TELOXIDE_API_URL）、REPLY_MENU 加载。

use hub_core::{HubError, Result};
use reqwest::Url;
use std::env;

/// Telegram 接入配置。
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    /// 自定义 Bot API 地址（本地 Bot API 服务或测试用 mock server）。
    pub telegram_api_url: Option<Url>,
    /// 常驻回复键盘的按钮文字；为空则不发送。
    pub reply_menu: Vec<String>,
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// 逗号分隔，去掉空白项。
fn parse_menu(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl TelegramConfig {
    /// 从环境变量加载：TELEGRAM_TOKEN / BOT_TOKEN 必填；API URL 若设置必须是合法 URL。
    pub fn from_env() -> Result<Self> {
        let bot_token = non_empty_var("TELEGRAM_TOKEN")
            .or_else(|| non_empty_var("BOT_TOKEN"))
            .ok_or_else(|| HubError::Config("TELEGRAM_TOKEN not set".to_string()))?;
        let telegram_api_url = match non_empty_var("TELEGRAM_API_URL")
            .or_else(|| non_empty_var("TELOXIDE_API_URL"))
        {
            Some(raw) => Some(Url::parse(&raw).map_err(|e| {
                HubError::Config(format!("Invalid TELEGRAM_API_URL {}: {}", raw, e))
            })?),
            None => None,
        };
        let reply_menu = non_empty_var("REPLY_MENU")
            .map(|raw| parse_menu(&raw))
            .unwrap_or_default();
        Ok(Self {
            bot_token,
            telegram_api_url,
            reply_menu,
        })
    }

    /// 使用给定 token 构造，其余为空。
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            reply_menu: Vec::new(),
        }
    }
}
