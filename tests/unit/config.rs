//! Unit tests for configuration loading

use signalscan::config::{ScanConfig, DEFAULT_FINNHUB_BASE_URL};
use signalscan::{ConfigError, ScanError};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

const CREDENTIALS: [(&str, &str); 2] = [
    ("FINNHUB_API_KEY", "test-key"),
    ("DISCORD_WEBHOOK_URL", "https://discord.test/webhook"),
];

#[test]
fn test_defaults() {
    let config = ScanConfig::from_lookup(lookup(&CREDENTIALS)).unwrap();
    assert_eq!(config.finnhub_api_key, "test-key");
    assert_eq!(config.finnhub_base_url, DEFAULT_FINNHUB_BASE_URL);
    assert_eq!(config.request_delay, Duration::from_millis(1200));
    assert_eq!(config.http_timeout, Duration::from_secs(10));
    assert_eq!(config.alert_state_path, PathBuf::from("alert_state.json"));
    assert_eq!(config.settings.alert_threshold, 2.5);
    assert_eq!(config.settings.max_symbols, 500);
    assert_eq!(config.settings.history_days, 120);
    assert_eq!(config.settings.cooldown, chrono::Duration::hours(24));
    assert_eq!(config.settings.exchange, "US");
}

#[test]
fn test_overrides() {
    let mut pairs = CREDENTIALS.to_vec();
    pairs.extend([
        ("ALERT_THRESHOLD", "3.1"),
        ("MAX_SYMBOLS", "25"),
        ("REQUEST_DELAY_MS", "0"),
        ("HISTORY_DAYS", "200"),
        ("COOLDOWN_HOURS", "6"),
        ("EXCHANGE", "us"),
        ("ALERT_STATE_PATH", "/var/lib/signalscan/state.json"),
        ("FINNHUB_BASE_URL", "http://127.0.0.1:9000/api/v1"),
    ]);
    let config = ScanConfig::from_lookup(lookup(&pairs)).unwrap();
    assert_eq!(config.settings.alert_threshold, 3.1);
    assert_eq!(config.settings.max_symbols, 25);
    assert_eq!(config.request_delay, Duration::ZERO);
    assert_eq!(config.settings.history_days, 200);
    assert_eq!(config.settings.cooldown, chrono::Duration::hours(6));
    assert_eq!(config.settings.exchange, "US");
    assert_eq!(
        config.alert_state_path,
        PathBuf::from("/var/lib/signalscan/state.json")
    );
    assert_eq!(config.finnhub_base_url, "http://127.0.0.1:9000/api/v1");
}

#[test]
fn test_missing_credentials() {
    let err = ScanConfig::from_lookup(lookup(&[("DISCORD_WEBHOOK_URL", "x")])).unwrap_err();
    assert!(matches!(err, ConfigError::Missing("FINNHUB_API_KEY")));

    let err = ScanConfig::from_lookup(lookup(&[("FINNHUB_API_KEY", "k")])).unwrap_err();
    assert!(matches!(err, ConfigError::Missing("DISCORD_WEBHOOK_URL")));
}

#[test]
fn test_blank_credential_is_missing() {
    let err = ScanConfig::from_lookup(lookup(&[
        ("FINNHUB_API_KEY", "   "),
        ("DISCORD_WEBHOOK_URL", "x"),
    ]))
    .unwrap_err();
    assert!(matches!(err, ConfigError::Missing("FINNHUB_API_KEY")));
}

#[test]
fn test_unparsable_tunable_is_rejected() {
    let mut pairs = CREDENTIALS.to_vec();
    pairs.push(("MAX_SYMBOLS", "lots"));
    let err = ScanConfig::from_lookup(lookup(&pairs)).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "MAX_SYMBOLS", .. }));
}

#[test]
fn test_negative_cooldown_is_rejected() {
    let mut pairs = CREDENTIALS.to_vec();
    pairs.push(("COOLDOWN_HOURS", "-1"));
    assert!(ScanConfig::from_lookup(lookup(&pairs)).is_err());
}

#[test]
fn test_config_error_converts_into_scan_error() {
    fn load(pairs: &[(&str, &str)]) -> signalscan::Result<ScanConfig> {
        Ok(ScanConfig::from_lookup(lookup(pairs))?)
    }

    let err = load(&[("DISCORD_WEBHOOK_URL", "x")]).unwrap_err();
    assert!(matches!(
        err,
        ScanError::Config(ConfigError::Missing("FINNHUB_API_KEY"))
    ));
    assert!(err.to_string().contains("FINNHUB_API_KEY"));
}
