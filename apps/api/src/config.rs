use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Highlight cap used when a request does not name one.
    pub default_max_highlights: usize,
    /// Largest highlight cap a request may ask for.
    pub max_highlights_limit: usize,
    /// Largest number of records accepted in one request.
    pub max_records: usize,
    /// Longest body (in chars) accepted per record.
    pub max_body_chars: usize,
    /// Most tags accepted on one record or keyword request.
    pub max_tags: usize,
    /// Longest tag (in chars) accepted.
    pub max_tag_chars: usize,
    /// Most highlight candidates accepted in one request.
    pub max_candidates: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            default_max_highlights: 5,
            max_highlights_limit: 20,
            max_records: 500,
            max_body_chars: 10_000,
            max_tags: 10,
            max_tag_chars: 64,
            max_candidates: 200,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let config = Config {
            port: env_or("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            default_max_highlights: env_or("MAX_HIGHLIGHTS", defaults.default_max_highlights)?,
            max_highlights_limit: env_or("MAX_HIGHLIGHTS_LIMIT", defaults.max_highlights_limit)?,
            max_records: env_or("MAX_RECORDS", defaults.max_records)?,
            max_body_chars: env_or("MAX_BODY_CHARS", defaults.max_body_chars)?,
            max_tags: env_or("MAX_TAGS", defaults.max_tags)?,
            max_tag_chars: env_or("MAX_TAG_CHARS", defaults.max_tag_chars)?,
            max_candidates: env_or("MAX_CANDIDATES", defaults.max_candidates)?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.default_max_highlights > self.max_highlights_limit {
            bail!(
                "MAX_HIGHLIGHTS ({}) must not exceed MAX_HIGHLIGHTS_LIMIT ({})",
                self.default_max_highlights,
                self.max_highlights_limit
            );
        }
        Ok(())
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("{key} must be a valid number, got '{raw}'"))
}
