use std::{env, fs, path::Path, time::Duration};

use crate::{errors::Error, format::ReplyStyle, Result};

/// Default endpoint of the public number-lookup API.
pub const DEFAULT_LOOKUP_BASE_URL: &str = "https://ox.taitaninfo.workers.dev";

/// Typed configuration, loaded once at startup.
#[derive(Clone, Debug)]
pub struct Config {
    // Bot connection (all three required; get the app credentials from
    // https://my.telegram.org/apps).
    pub telegram_bot_token: String,
    pub telegram_api_id: i64,
    pub telegram_api_hash: String,

    // Lookup API
    pub lookup_base_url: String,
    pub lookup_timeout: Duration,

    // Pipeline
    pub max_query_digits: usize,
    pub reply_style: ReplyStyle,
}

impl Config {
    /// Load from the environment (with `.env` honored if present).
    ///
    /// Missing required settings fail here, before any event loop starts;
    /// the bot never runs partially configured.
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        let telegram_bot_token = env_str("TELEGRAM_BOT_TOKEN")
            .and_then(non_empty)
            .ok_or_else(|| {
                Error::Config("TELEGRAM_BOT_TOKEN environment variable is required".to_string())
            })?;
        let telegram_api_id = env_str("TELEGRAM_API_ID")
            .and_then(|s| s.trim().parse::<i64>().ok())
            .ok_or_else(|| {
                Error::Config(
                    "TELEGRAM_API_ID must be set to the integer app id from my.telegram.org/apps"
                        .to_string(),
                )
            })?;
        let telegram_api_hash = env_str("TELEGRAM_API_HASH")
            .and_then(non_empty)
            .ok_or_else(|| {
                Error::Config(
                    "TELEGRAM_API_HASH must be set to the app hash from my.telegram.org/apps"
                        .to_string(),
                )
            })?;

        let lookup_base_url = env_str("LOOKUP_BASE_URL")
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_LOOKUP_BASE_URL.to_string());
        let lookup_timeout = Duration::from_secs(env_u64("LOOKUP_TIMEOUT_SECS").unwrap_or(10));

        let max_query_digits = env_usize("MAX_QUERY_DIGITS").unwrap_or(13);
        let reply_style = if env_bool("PLAIN_REPLIES").unwrap_or(false) {
            ReplyStyle::Plain
        } else {
            ReplyStyle::Decorated
        };

        Ok(Self {
            telegram_bot_token,
            telegram_api_id,
            telegram_api_hash,
            lookup_base_url,
            lookup_timeout,
            max_query_digits,
            reply_style,
        })
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        env::set_var(key, val);
    }
}

fn env_bool(key: &str) -> Option<bool> {
    env_str(key).map(|s| {
        matches!(
            s.trim().to_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}

fn env_u64(key: &str) -> Option<u64> {
    env_str(key).and_then(|s| s.trim().parse::<u64>().ok())
}

fn env_usize(key: &str) -> Option<usize> {
    env_str(key).and_then(|s| s.trim().parse::<usize>().ok())
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
