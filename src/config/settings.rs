//! Dashboard configuration settings and environment variable handling

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use std::env;
use std::str::FromStr;
use std::time::Duration;

// Configuration constants
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_PREFERENCES_PATH: &str = "output/preferences.json";
pub const DEFAULT_LOG_DIR: &str = "output/logs";
pub const DEFAULT_LOG_LEVEL: &str = "info";
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 30;
pub const MIN_REFRESH_INTERVAL_SECS: u64 = 5;
pub const MAX_REFRESH_INTERVAL_SECS: u64 = 3600;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

pub const MAX_FEE_RATE_PCT: Decimal = dec!(10); // 10% per leg
pub const DEFAULT_MAX_DISPLAY_ROWS: usize = 20;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub refresh_interval_secs: u64,
    pub request_timeout_secs: u64,
    pub default_fee_rate_pct: Decimal,
    pub default_investment_usd: Decimal,
    pub preferences_path: String,
    pub max_display_rows: usize,
    pub log_dir: String,
    /// Level for this crate's own events; `RUST_LOG` still overrides everything
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup so tests never touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let decimal = |key: &str| lookup(key).and_then(|s| Decimal::from_str(s.trim()).ok());

        Self {
            api_base_url: lookup("ARBITRAGE_API_URL")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            refresh_interval_secs: lookup("REFRESH_INTERVAL_SECS")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(DEFAULT_REFRESH_INTERVAL_SECS)
                .clamp(MIN_REFRESH_INTERVAL_SECS, MAX_REFRESH_INTERVAL_SECS),
            request_timeout_secs: lookup("REQUEST_TIMEOUT_SECS")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
                .clamp(1, MAX_REQUEST_TIMEOUT_SECS),
            default_fee_rate_pct: decimal("DEFAULT_FEE_RATE_PCT")
                .unwrap_or(dec!(0.2))
                .max(Decimal::ZERO)
                .min(MAX_FEE_RATE_PCT),
            default_investment_usd: decimal("DEFAULT_INVESTMENT_USD")
                .unwrap_or(dec!(1000))
                .max(Decimal::ZERO),
            preferences_path: lookup("PREFERENCES_PATH")
                .unwrap_or_else(|| DEFAULT_PREFERENCES_PATH.to_string()),
            max_display_rows: lookup("MAX_DISPLAY_ROWS")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(DEFAULT_MAX_DISPLAY_ROWS)
                .max(1),
            log_dir: lookup("LOG_DIR")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_DIR.to_string()),
            log_level: lookup("LOG_LEVEL")
                .map(|s| s.trim().to_lowercase())
                .filter(|s| LOG_LEVELS.contains(&s.as_str()))
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// `GET` target for the quote feed
    pub fn arbitrage_endpoint(&self) -> String {
        format!("{}/arbitrage", self.api_base_url.trim_end_matches('/'))
    }
}
