// src/config/settings.rs
//! Environment-sourced settings, read once and passed around by reference.
//!
//! Secrets are optional here: a notifier that needs one checks for it.

use std::fmt;

pub const ENV_TELEGRAM_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
pub const ENV_TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";
pub const ENV_DISCORD_WEBHOOK_STOCK: &str = "DISCORD_WEBHOOK_STOCK";
pub const ENV_DISCORD_WEBHOOK_EVENTS: &str = "DISCORD_WEBHOOK_EVENTS";
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
pub const ENV_DATABASE_PATH: &str = "DATABASE_PATH";

pub const DEFAULT_LOG_LEVEL: &str = "INFO";
pub const DEFAULT_DATABASE_PATH: &str = "data/tcg_sentinel.db";

#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
    pub discord_webhook_stock: Option<String>,
    pub discord_webhook_events: Option<String>,
    pub log_level: String,
    pub database_path: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            telegram_bot_token: get(ENV_TELEGRAM_BOT_TOKEN),
            telegram_chat_id: get(ENV_TELEGRAM_CHAT_ID),
            discord_webhook_stock: get(ENV_DISCORD_WEBHOOK_STOCK),
            discord_webhook_events: get(ENV_DISCORD_WEBHOOK_EVENTS),
            log_level: get(ENV_LOG_LEVEL).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            database_path: get(ENV_DATABASE_PATH)
                .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string()),
        }
    }

    /// Both halves of the Telegram target are present.
    pub fn telegram_configured(&self) -> bool {
        self.telegram_bot_token.is_some() && self.telegram_chat_id.is_some()
    }

    /// Webhook for a Discord channel id as used in routing ("stock", "events").
    pub fn discord_webhook(&self, channel: &str) -> Option<&str> {
        match channel.to_ascii_lowercase().as_str() {
            "stock" => self.discord_webhook_stock.as_deref(),
            "events" => self.discord_webhook_events.as_deref(),
            _ => None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

// Never print secrets, only whether they are set.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn set(v: &Option<String>) -> &'static str {
            if v.is_some() {
                "<set>"
            } else {
                "<unset>"
            }
        }
        f.debug_struct("Settings")
            .field("telegram_bot_token", &set(&self.telegram_bot_token))
            .field("telegram_chat_id", &set(&self.telegram_chat_id))
            .field("discord_webhook_stock", &set(&self.discord_webhook_stock))
            .field("discord_webhook_events", &set(&self.discord_webhook_events))
            .field("log_level", &self.log_level)
            .field("database_path", &self.database_path)
            .finish()
    }
}
