//! HTTP client for the Telegram Bot API.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::types::{ApiResponse, Message, Update, User};
use crate::BotError;

const TELEGRAM_API_ROOT: &str = "https://api.telegram.org";

/// Client for the handful of Bot API methods the poller needs.
///
/// The token is baked into every request URL, so network errors are
/// stripped of their URL before they surface anywhere loggable.
pub struct BotClient {
    client: Client,
    base_url: String,
}

impl BotClient {
    /// Creates a `BotClient` against the production Telegram API.
    ///
    /// `poll_timeout_secs` is the long-poll hold time passed to
    /// `getUpdates`; the HTTP timeout is set above it so a quiet poll is
    /// not misreported as a network failure.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(token: &str, poll_timeout_secs: u64) -> Result<Self, BotError> {
        Self::with_api_root(TELEGRAM_API_ROOT, token, poll_timeout_secs)
    }

    /// Creates a `BotClient` against a custom API root, for tests and
    /// local Bot API servers.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_api_root(
        api_root: &str,
        token: &str,
        poll_timeout_secs: u64,
    ) -> Result<Self, BotError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(poll_timeout_secs + 10))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            base_url: format!("{api_root}/bot{token}"),
        })
    }

    /// Fetches the bot's own account, verifying the token in the process.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::Api`] when Telegram rejects the token, or
    /// [`BotError::Http`] on transport failure.
    pub async fn get_me(&self) -> Result<User, BotError> {
        let request = self.client.get(format!("{}/getMe", self.base_url));
        self.invoke("getMe", request).await
    }

    /// Long-polls for updates with `update_id >= offset`, holding the
    /// request open up to `poll_timeout_secs`.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::Api`] on an API-level rejection or
    /// [`BotError::Http`] on transport failure.
    pub async fn get_updates(
        &self,
        offset: i64,
        poll_timeout_secs: u64,
    ) -> Result<Vec<Update>, BotError> {
        let request = self
            .client
            .get(format!("{}/getUpdates", self.base_url))
            .query(&[
                ("offset", offset),
                ("timeout", i64::try_from(poll_timeout_secs).unwrap_or(i64::MAX)),
            ]);
        self.invoke("getUpdates", request).await
    }

    /// Sends `text` to `chat_id`, optionally in MarkdownV2 parse mode.
    /// MarkdownV2 text must already be escaped by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::Api`] when Telegram rejects the message (bad
    /// escaping is the usual cause) or [`BotError::Http`] on transport
    /// failure.
    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        markdown_v2: bool,
    ) -> Result<(), BotError> {
        let mut body = json!({ "chat_id": chat_id, "text": text });
        if markdown_v2 {
            body["parse_mode"] = json!("MarkdownV2");
        }
        let request = self
            .client
            .post(format!("{}/sendMessage", self.base_url))
            .json(&body);
        let _sent: Message = self.invoke("sendMessage", request).await?;
        Ok(())
    }

    /// Sends the request and unwraps the `{ok, result, description}`
    /// envelope. Telegram reports API errors both via non-2xx statuses and
    /// via `ok: false` bodies, so the body is always parsed first.
    async fn invoke<T: DeserializeOwned>(
        &self,
        method: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, BotError> {
        let response = request.send().await.map_err(reqwest::Error::without_url)?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(reqwest::Error::without_url)?;

        let Ok(envelope) = serde_json::from_str::<ApiResponse<T>>(&body) else {
            return Err(BotError::UnexpectedStatus {
                status: status.as_u16(),
                method: method.to_string(),
            });
        };

        if !envelope.ok {
            return Err(BotError::Api {
                method: method.to_string(),
                description: envelope
                    .description
                    .unwrap_or_else(|| format!("HTTP {status}")),
            });
        }

        envelope.result.ok_or_else(|| BotError::Api {
            method: method.to_string(),
            description: "response envelope missing result".to_string(),
        })
    }
}
