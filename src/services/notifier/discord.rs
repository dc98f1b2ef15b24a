//! Discord webhook notifications

use crate::config::ScanConfig;
use crate::error::{Result, ScanError};
use crate::models::alert::AlertMessage;
use crate::services::notifier::Notifier;
use async_trait::async_trait;
use chrono::SecondsFormat;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

#[derive(Serialize)]
struct WebhookPayload<'a> {
    embeds: [Embed<'a>; 1],
}

#[derive(Serialize)]
struct Embed<'a> {
    title: &'a str,
    description: &'a str,
    color: u32,
    timestamp: String,
}

#[derive(Clone)]
pub struct DiscordNotifier {
    client: Client,
    webhook_url: String,
}

impl DiscordNotifier {
    pub fn new(webhook_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(webhook_url, client))
    }

    pub fn with_client(webhook_url: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            webhook_url: webhook_url.into(),
        }
    }

    pub fn from_config(config: &ScanConfig) -> Result<Self> {
        Self::new(config.discord_webhook_url.clone(), config.http_timeout)
    }
}

#[async_trait]
impl Notifier for DiscordNotifier {
    async fn send(&self, alert: &AlertMessage) -> Result<()> {
        let payload = WebhookPayload {
            embeds: [Embed {
                title: &alert.title,
                description: &alert.description,
                color: alert.color,
                timestamp: alert.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            }],
        };

        let response = self
            .client
            .post(&self.webhook_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ScanError::Notification(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            debug!(title = %alert.title, "DiscordNotifier: alert delivered");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ScanError::Notification(format!("HTTP {}: {}", status, body)))
        }
    }
}
