//! Error types shared across the scanner

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScanError>;

/// Startup configuration errors. Always fatal.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Provider returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Malformed price history for {symbol}: {reason}")]
    MalformedHistory { symbol: String, reason: String },

    #[error("Notification delivery failed: {0}")]
    Notification(String),

    #[error("Alert ledger error: {0}")]
    Ledger(String),
}
