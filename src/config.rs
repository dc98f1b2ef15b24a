//! Process configuration
//!
//! Everything is read from the environment once at startup (a `.env` file is
//! honoured by the binary) and then passed around as an immutable
//! [`ScanConfig`].

use crate::error::ConfigError;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const FINNHUB_API_KEY: &str = "FINNHUB_API_KEY";
pub const DISCORD_WEBHOOK_URL: &str = "DISCORD_WEBHOOK_URL";

pub const DEFAULT_ALERT_THRESHOLD: f64 = 2.5;
pub const DEFAULT_MAX_SYMBOLS: usize = 500;
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 1200;
pub const DEFAULT_HISTORY_DAYS: i64 = 120;
pub const DEFAULT_COOLDOWN_HOURS: i64 = 24;
pub const DEFAULT_EXCHANGE: &str = "US";
pub const DEFAULT_ALERT_STATE_PATH: &str = "alert_state.json";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_FINNHUB_BASE_URL: &str = "https://finnhub.io/api/v1";

/// Deployment environment name, used to pick the log format.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Settings the scan loop itself consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanSettings {
    pub exchange: String,
    pub alert_threshold: f64,
    pub max_symbols: usize,
    pub history_days: i64,
    pub cooldown: chrono::Duration,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            exchange: DEFAULT_EXCHANGE.to_string(),
            alert_threshold: DEFAULT_ALERT_THRESHOLD,
            max_symbols: DEFAULT_MAX_SYMBOLS,
            history_days: DEFAULT_HISTORY_DAYS,
            cooldown: chrono::Duration::hours(DEFAULT_COOLDOWN_HOURS),
        }
    }
}

/// Full process configuration.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub finnhub_api_key: String,
    pub finnhub_base_url: String,
    pub discord_webhook_url: String,
    pub request_delay: Duration,
    pub http_timeout: Duration,
    pub alert_state_path: PathBuf,
    pub settings: ScanSettings,
}

impl ScanConfig {
    /// Build from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    ///
    /// Required credentials must be present and non-blank. Optional tunables
    /// fall back to their defaults when absent, but a present value that does
    /// not parse is rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let finnhub_api_key = required(&lookup, FINNHUB_API_KEY)?;
        let discord_webhook_url = required(&lookup, DISCORD_WEBHOOK_URL)?;

        let alert_threshold: f64 =
            optional(&lookup, "ALERT_THRESHOLD", DEFAULT_ALERT_THRESHOLD)?;
        if !alert_threshold.is_finite() {
            return Err(ConfigError::Invalid {
                key: "ALERT_THRESHOLD",
                value: alert_threshold.to_string(),
            });
        }

        let max_symbols = optional(&lookup, "MAX_SYMBOLS", DEFAULT_MAX_SYMBOLS)?;
        let request_delay_ms = optional(&lookup, "REQUEST_DELAY_MS", DEFAULT_REQUEST_DELAY_MS)?;
        let history_days: i64 = optional(&lookup, "HISTORY_DAYS", DEFAULT_HISTORY_DAYS)?;
        if history_days <= 0 {
            return Err(ConfigError::Invalid {
                key: "HISTORY_DAYS",
                value: history_days.to_string(),
            });
        }
        let cooldown_hours: i64 = optional(&lookup, "COOLDOWN_HOURS", DEFAULT_COOLDOWN_HOURS)?;
        if cooldown_hours < 0 {
            return Err(ConfigError::Invalid {
                key: "COOLDOWN_HOURS",
                value: cooldown_hours.to_string(),
            });
        }
        let http_timeout_secs =
            optional(&lookup, "HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?;

        let exchange = lookup("EXCHANGE")
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.trim().to_uppercase())
            .unwrap_or_else(|| DEFAULT_EXCHANGE.to_string());
        let alert_state_path = lookup("ALERT_STATE_PATH")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ALERT_STATE_PATH.to_string());
        let finnhub_base_url = lookup("FINNHUB_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FINNHUB_BASE_URL.to_string());

        Ok(Self {
            finnhub_api_key,
            finnhub_base_url,
            discord_webhook_url,
            request_delay: Duration::from_millis(request_delay_ms),
            http_timeout: Duration::from_secs(http_timeout_secs),
            alert_state_path: PathBuf::from(alert_state_path),
            settings: ScanSettings {
                exchange,
                alert_threshold,
                max_symbols,
                history_days,
                cooldown: chrono::Duration::hours(cooldown_hours),
            },
        })
    }
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(ConfigError::Missing(key)),
    }
}

fn optional<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
