//! Bot-token startup check with first-run `.env` scaffolding.

use std::fs;
use std::path::Path;

use anyhow::Context;

use vbwatch_core::AppConfig;

pub const PLACEHOLDER_TOKEN: &str = "your_bot_token_here";

const PLACEHOLDER_ENV: &str = "# Telegram bot configuration\n\
VBWATCH_BOT_TOKEN=your_bot_token_here\n";

/// Returns the bot token, or a fatal error telling the operator how to
/// provide one.
///
/// On a first run with no settings file at `env_path`, a placeholder file
/// is written so the operator only has to fill in the token. The
/// placeholder value itself is rejected as unset.
///
/// # Errors
///
/// Fails when the token is missing or still the placeholder, and when the
/// placeholder file cannot be written.
pub fn require_bot_token(config: &AppConfig, env_path: &Path) -> anyhow::Result<String> {
    if let Some(token) = config
        .bot_token
        .as_deref()
        .filter(|t| *t != PLACEHOLDER_TOKEN)
    {
        return Ok(token.to_string());
    }

    if !env_path.exists() {
        fs::write(env_path, PLACEHOLDER_ENV)
            .with_context(|| format!("failed to create placeholder {}", env_path.display()))?;
        anyhow::bail!(
            "created {}; fill in VBWATCH_BOT_TOKEN with your Telegram bot token and run again",
            env_path.display()
        );
    }

    anyhow::bail!(
        "VBWATCH_BOT_TOKEN is not set; add it to {} or the environment",
        env_path.display()
    )
}
