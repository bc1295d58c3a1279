use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 5001;
const DEFAULT_ANALYSIS_LATENCY_MS: u64 = 800;

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Simulated round-trip delay added to every component analysis.
    pub analysis_latency: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup("PORT") {
            Some(v) => v.parse::<u16>().context("PORT must be a valid port number")?,
            None => DEFAULT_PORT,
        };
        let latency_ms = match lookup("ANALYSIS_LATENCY_MS") {
            Some(v) => v
                .parse::<u64>()
                .context("ANALYSIS_LATENCY_MS must be a non-negative integer")?,
            None => DEFAULT_ANALYSIS_LATENCY_MS,
        };

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            analysis_latency: Duration::from_millis(latency_ms),
        })
    }
}
