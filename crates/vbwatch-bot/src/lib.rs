pub mod client;
pub mod dispatch;
pub mod poller;
pub mod types;

use thiserror::Error;

pub use client::BotClient;
pub use dispatch::Command;
pub use poller::Poller;
pub use types::{Chat, Message, Update, User};

#[derive(Debug, Error)]
pub enum BotError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Telegram API rejected {method}: {description}")]
    Api { method: String, description: String },

    #[error("unexpected HTTP status {status} from Telegram {method}")]
    UnexpectedStatus { status: u16, method: String },
}
