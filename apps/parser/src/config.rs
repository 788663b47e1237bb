use anyhow::{Context, Result};

/// Runtime configuration loaded from environment variables.
/// Everything has a default; only malformed values are rejected.
#[derive(Debug, Clone)]
pub struct Config {
    /// External NER service. When unset the rule-based annotator is used.
    pub ner_service_url: Option<String>,
    pub ner_timeout_secs: u64,
    pub ner_max_retries: u32,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            ner_service_url: optional_env("NER_SERVICE_URL"),
            ner_timeout_secs: std::env::var("NER_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse::<u64>()
                .context("NER_TIMEOUT_SECS must be a whole number of seconds")?,
            ner_max_retries: std::env::var("NER_MAX_RETRIES")
                .unwrap_or_else(|_| "3".to_string())
                .parse::<u32>()
                .context("NER_MAX_RETRIES must be a non-negative integer")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
