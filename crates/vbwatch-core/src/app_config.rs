use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    /// Telegram bot credential. Only required when running the bot; the
    /// batch report never reads it.
    pub bot_token: Option<String>,
    pub missions_url: String,
    pub cache_path: PathBuf,
    pub log_level: String,
    pub http_timeout_secs: u64,
    pub user_agent: String,
    pub max_retries: u32,
    pub retry_backoff_base_secs: u64,
    pub poll_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("bot_token", &self.bot_token.as_ref().map(|_| "[redacted]"))
            .field("missions_url", &self.missions_url)
            .field("cache_path", &self.cache_path)
            .field("log_level", &self.log_level)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_base_secs", &self.retry_backoff_base_secs)
            .field("poll_timeout_secs", &self.poll_timeout_secs)
            .finish()
    }
}
