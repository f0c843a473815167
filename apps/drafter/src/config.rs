use std::time::Duration;

use anyhow::{Context, Result};

/// Drafter configuration loaded from environment variables.
/// Without an API key the drafter runs in prompt-only mode.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: Option<String>,
    pub llm_timeout: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            anthropic_api_key: lookup("ANTHROPIC_API_KEY").filter(|k| !k.trim().is_empty()),
            llm_timeout: Duration::from_secs(
                lookup("LLM_TIMEOUT_SECS")
                    .unwrap_or_else(|| "120".to_string())
                    .parse::<u64>()
                    .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
