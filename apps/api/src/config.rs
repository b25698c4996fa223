use anyhow::{Context, Result};

use crate::crossword::ScoringPolicy;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on words in one crossword.
    pub max_words: usize,
    /// Upper bound on letters per word. Layout cost grows with the cube of word length.
    pub max_word_len: usize,
    /// Fixes the layout RNG for every request that does not pass its own seed.
    pub layout_seed: Option<u64>,
    pub scoring: ScoringPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .with_context(|| format!("Required environment variable '{key}' is not set"))
        };

        Ok(Config {
            anthropic_api_key: require("ANTHROPIC_API_KEY")?,
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_words: match lookup("MAX_WORDS") {
                Some(v) => parse_positive("MAX_WORDS", &v)?,
                None => 30,
            },
            max_word_len: match lookup("MAX_WORD_LEN") {
                Some(v) => parse_positive("MAX_WORD_LEN", &v)?,
                None => 24,
            },
            layout_seed: lookup("LAYOUT_SEED")
                .map(|v| v.trim().parse::<u64>())
                .transpose()
                .context("LAYOUT_SEED must be an unsigned integer")?,
            scoring: match lookup("LAYOUT_SCORING") {
                Some(v) => v
                    .parse::<ScoringPolicy>()
                    .map_err(anyhow::Error::msg)
                    .context("LAYOUT_SCORING is invalid")?,
                None => ScoringPolicy::default(),
            },
        })
    }
}

fn parse_positive(key: &str, raw: &str) -> Result<usize> {
    let value = raw
        .trim()
        .parse::<usize>()
        .with_context(|| format!("{key} must be a positive integer"))?;
    if value == 0 {
        anyhow::bail!("{key} must be at least 1");
    }
    Ok(value)
}
