//! Telegram delivery for homework status notifications.
//!
//! The bot is write-only: one `sendMessage` call per notification, no
//! command surface and no retries. A failed delivery surfaces as
//! [`WatchError::Delivery`] and the poll loop decides what to do with it.

use std::time::Duration;

use serde::Deserialize;

use domashka_common::error::WatchError;

/// Production Bot API host.
const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// The slice of the Bot API response envelope we act on.
#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    ok: bool,
    description: Option<String>,
}

/// Sends plain-text messages to one preconfigured chat through a bot.
pub struct TelegramNotifier {
    client: reqwest::Client,
    api_base: String,
    token: String,
    chat_id: String,
    timeout: Duration,
}

impl TelegramNotifier {
    pub fn new(token: String, chat_id: String, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: TELEGRAM_API_BASE.to_string(),
            token,
            chat_id,
            timeout,
        }
    }

    /// Point the notifier at a different Bot API host. Tests aim this at a
    /// local mock server.
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Deliver one text message to the configured chat.
    pub async fn send(&self, text: &str) -> Result<(), WatchError> {
        let url = format!("{}/bot{}/sendMessage", self.api_base, self.token);
        let body = serde_json::json!({
            "chat_id": self.chat_id,
            "text": text,
        });

        let response = self
            .client
            .post(url)
            .json(&body)
            .timeout(self.timeout)
            .send()
            .await
            // The request URL embeds the bot token; strip it before the
            // error text can reach logs or the chat itself.
            .map_err(|e| WatchError::Delivery(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(WatchError::Delivery(format!(
                "API returned {status}: {detail}"
            )));
        }

        let envelope: SendMessageResponse = response
            .json()
            .await
            .map_err(|e| WatchError::Delivery(e.without_url().to_string()))?;
        if !envelope.ok {
            return Err(WatchError::Delivery(envelope.description.unwrap_or_else(
                || "Bot API answered ok=false without a description".to_string(),
            )));
        }

        tracing::debug!(chat_id = %self.chat_id, "Telegram message delivered");
        Ok(())
    }
}
