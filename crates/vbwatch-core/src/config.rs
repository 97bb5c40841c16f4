use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric env var fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric env var fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing logic, decoupled from the actual environment so
/// it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var`
/// needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let bot_token = lookup("VBWATCH_BOT_TOKEN")
        .ok()
        .filter(|t| !t.trim().is_empty());

    let missions_url = or_default(
        "VBWATCH_MISSIONS_URL",
        "https://freethevbucks.com/timed-missions/",
    );
    let cache_path = PathBuf::from(or_default("VBWATCH_CACHE_PATH", "vbucks_cache.json"));
    let log_level = or_default("VBWATCH_LOG_LEVEL", "info");

    let http_timeout_secs = parse_u64("VBWATCH_HTTP_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("VBWATCH_USER_AGENT", "vbwatch/0.1 (mission-report)");
    let max_retries = parse_u32("VBWATCH_MAX_RETRIES", "3")?;
    let retry_backoff_base_secs = parse_u64("VBWATCH_RETRY_BACKOFF_BASE_SECS", "2")?;
    let poll_timeout_secs = parse_u64("VBWATCH_POLL_TIMEOUT_SECS", "60")?;

    Ok(AppConfig {
        bot_token,
        missions_url,
        cache_path,
        log_level,
        http_timeout_secs,
        user_agent,
        max_retries,
        retry_backoff_base_secs,
        poll_timeout_secs,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn build_app_config_succeeds_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!(cfg.bot_token.is_none());
        assert_eq!(cfg.missions_url, "https://freethevbucks.com/timed-missions/");
        assert_eq!(cfg.cache_path.to_str(), Some("vbucks_cache.json"));
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.http_timeout_secs, 30);
        assert_eq!(cfg.user_agent, "vbwatch/0.1 (mission-report)");
        assert_eq!(cfg.max_retries, 3);
        assert_eq!(cfg.retry_backoff_base_secs, 2);
        assert_eq!(cfg.poll_timeout_secs, 60);
    }

    #[test]
    fn bot_token_present() {
        let mut map = HashMap::new();
        map.insert("VBWATCH_BOT_TOKEN", "123456:abcdef");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.bot_token.as_deref(), Some("123456:abcdef"));
    }

    #[test]
    fn blank_bot_token_treated_as_absent() {
        let mut map = HashMap::new();
        map.insert("VBWATCH_BOT_TOKEN", "   ");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!(cfg.bot_token.is_none());
    }

    #[test]
    fn missions_url_override() {
        let mut map = HashMap::new();
        map.insert("VBWATCH_MISSIONS_URL", "http://localhost:8080/missions");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.missions_url, "http://localhost:8080/missions");
    }

    #[test]
    fn http_timeout_override() {
        let mut map = HashMap::new();
        map.insert("VBWATCH_HTTP_TIMEOUT_SECS", "5");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.http_timeout_secs, 5);
    }

    #[test]
    fn http_timeout_invalid() {
        let mut map = HashMap::new();
        map.insert("VBWATCH_HTTP_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VBWATCH_HTTP_TIMEOUT_SECS"),
            "expected InvalidEnvVar(VBWATCH_HTTP_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn max_retries_invalid() {
        let mut map = HashMap::new();
        map.insert("VBWATCH_MAX_RETRIES", "-1");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VBWATCH_MAX_RETRIES"),
            "expected InvalidEnvVar(VBWATCH_MAX_RETRIES), got: {result:?}"
        );
    }

    #[test]
    fn poll_timeout_override() {
        let mut map = HashMap::new();
        map.insert("VBWATCH_POLL_TIMEOUT_SECS", "30");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.poll_timeout_secs, 30);
    }

    #[test]
    fn debug_redacts_bot_token() {
        let mut map = HashMap::new();
        map.insert("VBWATCH_BOT_TOKEN", "123456:secret");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let debug = format!("{cfg:?}");
        assert!(!debug.contains("secret"), "token leaked in Debug: {debug}");
        assert!(debug.contains("[redacted]"));
    }
}
