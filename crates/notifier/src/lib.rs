// In crates/notifier/src/lib.rs

use app_config::types::TelegramSettings;
use async_trait::async_trait;
use serde_json::Value;

pub mod error;
pub mod types;

// Re-export public types
pub use error::{Error, Result};
pub use types::TradeNotification;

/// The universal interface for the outbound notification channel.
///
/// Notifications are informational and fire-and-forget: a failed send is the
/// caller's to log, never a reason to undo the transaction that triggered it.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// The name of the notification channel.
    fn name(&self) -> &'static str;

    /// Pushes one notification.
    async fn notify(&self, notification: &TradeNotification) -> Result<()>;
}

/// Notifier pushing messages through the Telegram Bot API.
pub struct TelegramNotifier {
    http_client: reqwest::Client,
    api_base_url: String,
    bot_token: String,
    chat_id: String,
}

impl TelegramNotifier {
    /// Constructs a new TelegramNotifier from TelegramSettings.
    pub fn new(settings: &TelegramSettings) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_base_url: settings.api_base_url.clone(),
            bot_token: settings.bot_token.clone(),
            chat_id: settings.chat_id.clone(),
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    fn name(&self) -> &'static str {
        "TelegramNotifier"
    }

    /// Sends the message via `GET /bot<token>/sendMessage`.
    async fn notify(&self, notification: &TradeNotification) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_base_url, self.bot_token);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("chat_id", self.chat_id.as_str()),
                ("parse_mode", "Markdown"),
                ("text", notification.to_message().as_str()),
            ])
            .send()
            .await
            .map_err(Error::RequestFailed)?;

        let value: Value = response.json().await.map_err(Error::RequestFailed)?;

        // Telegram wraps every response in {"ok": bool, ...}.
        if !value.get("ok").and_then(Value::as_bool).unwrap_or(false) {
            let description = value
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or("Unknown error")
                .to_string();
            return Err(Error::ApiError { description });
        }

        Ok(())
    }
}

/// Notifier that only logs. Used for dry runs and when the Telegram channel
/// is disabled in configuration.
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    fn name(&self) -> &'static str {
        "NoopNotifier"
    }

    async fn notify(&self, notification: &TradeNotification) -> Result<()> {
        tracing::info!(message = %notification.to_message(), "Notification channel disabled. Dropping message.");
        Ok(())
    }
}
