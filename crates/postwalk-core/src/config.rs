use std::{env, fs, path::Path};

use crate::{errors::Error, Result};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api/v1";

/// Typed startup configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Bot credential for the chat transport.
    pub telegram_token: String,
    /// Bearer credential for the upstream content API.
    pub api_token: String,
    /// Chat that receives best-effort startup-failure alerts.
    pub alert_chat_id: i64,
    /// Upstream base URL, without a trailing slash.
    pub api_url: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        let telegram_token = require_env("TELEGRAM_TOKEN")?;
        let api_token = require_env("API_TOKEN")?;

        let alert_chat_id = require_env("TELEGRAM_CHAT_ID")?
            .trim()
            .parse::<i64>()
            .map_err(|_| {
                Error::Config("TELEGRAM_CHAT_ID must be a numeric chat id".to_string())
            })?;

        let api_url = env_str("API_URL")
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            telegram_token,
            api_token,
            alert_chat_id,
            api_url,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    env_str(key)
        .and_then(non_empty)
        .ok_or_else(|| Error::Config(format!("{key} environment variable is required")))
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let Some((key, val)) = parse_dotenv_line(raw) else {
            continue;
        };
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }
        env::set_var(key, val);
    }
}

fn parse_dotenv_line(raw: &str) -> Option<(&str, String)> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (k, v) = line.split_once('=')?;
    let key = k.trim();
    if key.is_empty() {
        return None;
    }

    let mut val = v.trim().to_string();
    // Strip optional surrounding quotes.
    if val.len() >= 2
        && ((val.starts_with('"') && val.ends_with('"'))
            || (val.starts_with('\'') && val.ends_with('\'')))
    {
        val = val[1..val.len() - 1].to_string();
    }

    Some((key, val))
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
