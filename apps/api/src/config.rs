use std::str::FromStr;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upload size limit in bytes (10 MiB by default).
    pub max_upload_bytes: usize,
    /// Job descriptions are cut to this many characters, like the textarea does.
    pub max_job_description_chars: usize,
    /// Extraction runs during analysis only for descriptions longer than this.
    pub min_job_description_chars: usize,
    pub keyword_limit: usize,
    /// Delay before the simulated parser returns for non-text uploads.
    pub parse_delay_ms: u64,
    /// Fixed seed for keyword relevance. `None` draws from OS entropy.
    pub relevance_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            max_upload_bytes: 10 * 1024 * 1024,
            max_job_description_chars: 5000,
            min_job_description_chars: 50,
            keyword_limit: 20,
            parse_delay_ms: 1500,
            relevance_seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        Ok(Config {
            port: env_or("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
            max_job_description_chars: env_or(
                "MAX_JOB_DESCRIPTION_CHARS",
                defaults.max_job_description_chars,
            )?,
            min_job_description_chars: env_or(
                "MIN_JOB_DESCRIPTION_CHARS",
                defaults.min_job_description_chars,
            )?,
            keyword_limit: env_or("KEYWORD_LIMIT", defaults.keyword_limit)?,
            parse_delay_ms: env_or("PARSE_DELAY_MS", defaults.parse_delay_ms)?,
            relevance_seed: optional_env("RELEVANCE_SEED")?,
        })
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    Ok(optional_env(key)?.unwrap_or(default))
}

fn optional_env<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(None),
    }
}
