//! Telegram Bot API response types, limited to the fields this bot reads.
//!
//! Every method returns an envelope `{ "ok": bool, "result": ...,
//! "description": ... }`; `description` is only present on failures.
//! Updates carry many optional payloads (edited messages, callback
//! queries, ...) — everything except plain messages is ignored here, so
//! those fields simply are not modeled.

use serde::Deserialize;

/// The envelope every Bot API method responds with.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(default)]
    pub result: Option<T>,
    /// Human-readable failure reason; absent on success.
    #[serde(default)]
    pub description: Option<String>,
}

/// One long-poll update from `getUpdates`.
#[derive(Debug, Deserialize)]
pub struct Update {
    pub update_id: i64,
    /// Absent for non-message updates (edits, channel posts, ...).
    #[serde(default)]
    pub message: Option<Message>,
}

/// An incoming chat message.
#[derive(Debug, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    /// Absent for stickers, photos, and other non-text content.
    #[serde(default)]
    pub text: Option<String>,
}

/// The chat a message belongs to.
#[derive(Debug, Deserialize)]
pub struct Chat {
    pub id: i64,
}

/// The bot's own account, from `getMe`.
#[derive(Debug, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
}
