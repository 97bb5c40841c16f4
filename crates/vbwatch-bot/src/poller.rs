//! The long-polling update loop.

use std::time::Duration;

use vbwatch_core::format::telegram_list;
use vbwatch_store::MissionService;

use crate::client::BotClient;
use crate::dispatch::{Command, HELP_TEXT, UNKNOWN_TEXT, WELCOME_TEXT};
use crate::BotError;

/// Seconds to wait before polling again after a transport error.
const POLL_ERROR_BACKOFF_SECS: u64 = 5;

/// Drives `getUpdates` long polling and answers recognized commands with
/// the current mission list.
///
/// Only token validation at startup is fatal. Poll transport errors are
/// logged and retried; a failed mission refresh answers the chat with the
/// empty-list rendering instead of killing the listener.
pub struct Poller {
    client: BotClient,
    service: MissionService,
    poll_timeout_secs: u64,
}

impl Poller {
    #[must_use]
    pub fn new(client: BotClient, service: MissionService, poll_timeout_secs: u64) -> Self {
        Self {
            client,
            service,
            poll_timeout_secs,
        }
    }

    /// Runs the poll loop until the process is stopped.
    ///
    /// # Errors
    ///
    /// Returns an error only when the initial `getMe` token check fails.
    pub async fn run(&self) -> Result<(), BotError> {
        let me = self.client.get_me().await?;
        tracing::info!(
            username = me.username.as_deref().unwrap_or("<unset>"),
            "authorized bot account"
        );

        let mut offset = 0i64;
        loop {
            let updates = match self.client.get_updates(offset, self.poll_timeout_secs).await {
                Ok(updates) => updates,
                Err(err) => {
                    tracing::warn!(error = %err, "getUpdates failed, backing off");
                    tokio::time::sleep(Duration::from_secs(POLL_ERROR_BACKOFF_SECS)).await;
                    continue;
                }
            };

            for update in updates {
                offset = offset.max(update.update_id + 1);

                let Some(message) = update.message else {
                    continue;
                };
                let Some(text) = message.text.as_deref() else {
                    continue;
                };

                // Chat IDs are logged to help operators set up new chats.
                tracing::info!(chat_id = message.chat.id, "received message");

                let Some(command) = Command::parse(text) else {
                    continue;
                };
                self.answer(command, message.chat.id).await;
            }
        }
    }

    async fn answer(&self, command: Command, chat_id: i64) {
        match command {
            Command::Start => {
                self.send(chat_id, WELCOME_TEXT, false).await;
                let missions = self.missions_text().await;
                self.send(chat_id, &missions, true).await;
            }
            Command::Vbucks => {
                let missions = self.missions_text().await;
                self.send(chat_id, &missions, true).await;
            }
            Command::Help => self.send(chat_id, HELP_TEXT, false).await,
            Command::Unknown => self.send(chat_id, UNKNOWN_TEXT, false).await,
        }
    }

    /// Renders today's missions, degrading to the empty-list rendering
    /// when the upstream fetch fails.
    async fn missions_text(&self) -> String {
        match self.service.missions().await {
            Ok(missions) => telegram_list(&missions),
            Err(err) => {
                tracing::error!(error = %err, "mission refresh failed");
                telegram_list(&[])
            }
        }
    }

    async fn send(&self, chat_id: i64, text: &str, markdown_v2: bool) {
        if let Err(err) = self.client.send_message(chat_id, text, markdown_v2).await {
            tracing::warn!(chat_id, error = %err, "failed to send message");
        }
    }
}
