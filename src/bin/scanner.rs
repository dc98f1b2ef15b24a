//! Signalscan batch scanner
//!
//! Scans the configured exchange once, alerts on qualifying symbols and
//! exits. Meant to be started by an external scheduler (cron, systemd
//! timer, ...).

use dotenvy::dotenv;
use signalscan::config::{get_environment, ScanConfig};
use signalscan::core::{FixedDelay, ScanContext, ScanRuntime};
use signalscan::logging;
use signalscan::services::{DiscordNotifier, FinnhubClient};
use signalscan::signals::NeutralSentiment;
use signalscan::ScanError;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    info!("Starting Signalscan");
    info!(environment = %get_environment(), "Environment");

    match run().await {
        Ok(alerts) => {
            info!(alerts = alerts, "Signalscan finished, {} alerts sent", alerts);
            ExitCode::SUCCESS
        }
        Err(e @ ScanError::Config(_)) => {
            error!(error = %e, "Invalid configuration");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!(error = %e, "Scan aborted");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> signalscan::Result<usize> {
    let config = ScanConfig::from_env()?;
    info!(
        exchange = %config.settings.exchange,
        threshold = config.settings.alert_threshold,
        max_symbols = config.settings.max_symbols,
        delay_ms = config.request_delay.as_millis() as u64,
        history_days = config.settings.history_days,
        cooldown_hours = config.settings.cooldown.num_hours(),
        state = %config.alert_state_path.display(),
        "Scan settings"
    );

    let finnhub = Arc::new(FinnhubClient::from_config(&config)?);
    let notifier = Arc::new(DiscordNotifier::from_config(&config)?);

    let context = ScanContext::new(
        finnhub.clone(),
        finnhub,
        notifier,
        Arc::new(NeutralSentiment),
        Arc::new(FixedDelay(config.request_delay)),
    );

    let report = ScanRuntime::from_config(context, &config).run().await?;
    Ok(report.alert_count())
}
