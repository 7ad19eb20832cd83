//! Environment-driven server configuration.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use abfuhr_core::cache::{CacheConfig, DEFAULT_CAPACITY, DEFAULT_TTL};
use abfuhr_provider_korneuburg::BASE_URL;
use anyhow::{Context, Result};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per event.
    Json,
}

/// Runtime settings, read from `ABFUHR_*` variables and an optional `.env`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Socket the HTTP server binds to.
    pub listen_addr: SocketAddr,
    /// Calendar page the provider scrapes.
    pub base_url: String,
    /// Bounds of the schedule cache.
    pub cache: CacheConfig,
    /// Upper bound for a single upstream request.
    pub fetch_timeout: Duration,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let listen_addr = var_or("ABFUHR_LISTEN_ADDR", DEFAULT_LISTEN_ADDR)
            .parse()
            .context("Invalid ABFUHR_LISTEN_ADDR")?;
        let base_url = var_or("ABFUHR_BASE_URL", BASE_URL);
        let capacity = parse_var("ABFUHR_CACHE_CAPACITY", DEFAULT_CAPACITY)?;
        let ttl_secs = parse_var("ABFUHR_CACHE_TTL_SECS", DEFAULT_TTL.as_secs())?;
        let timeout_secs = parse_var("ABFUHR_FETCH_TIMEOUT_SECS", DEFAULT_FETCH_TIMEOUT_SECS)?;
        let log_format = if var_or("ABFUHR_LOG_FORMAT", "text").eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        };

        Ok(Self {
            listen_addr,
            base_url,
            cache: CacheConfig {
                capacity,
                ttl: Duration::from_secs(ttl_secs),
            },
            fetch_timeout: Duration::from_secs(timeout_secs),
            log_format,
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_var(key: &str, default: u64) -> Result<u64> {
    env::var(key).map_or(Ok(default), |raw| {
        raw.trim()
            .parse()
            .with_context(|| format!("Invalid {key}: {raw:?}"))
    })
}
