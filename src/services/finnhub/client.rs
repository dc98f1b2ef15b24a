//! Finnhub HTTP client

use crate::config::ScanConfig;
use crate::error::{Result, ScanError};
use crate::models::series::PriceSeries;
use crate::services::market_data::{PriceHistoryProvider, SymbolUniverse};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::messages::{CandleResponse, SymbolEntry};

pub struct FinnhubClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl FinnhubClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(base_url, api_key, client))
    }

    pub fn with_client(base_url: impl Into<String>, api_key: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(config: &ScanConfig) -> Result<Self> {
        Self::new(
            config.finnhub_base_url.clone(),
            config.finnhub_api_key.clone(),
            config.http_timeout,
        )
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))?;
        url.query_pairs_mut()
            .extend_pairs(params.iter().copied())
            .append_pair("token", &self.api_key);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScanError::Api {
                status: status.as_u16(),
                body,
            });
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl SymbolUniverse for FinnhubClient {
    async fn list_symbols(&self, exchange: &str) -> Result<Vec<String>> {
        let url = self.endpoint("/stock/symbol", &[("exchange", exchange)])?;
        let entries: Vec<SymbolEntry> = self.get_json(url).await?;
        debug!(
            exchange = %exchange,
            count = entries.len(),
            "FinnhubClient: fetched {} symbols for {}",
            entries.len(),
            exchange
        );
        Ok(entries.into_iter().map(|e| e.symbol).collect())
    }
}

#[async_trait]
impl PriceHistoryProvider for FinnhubClient {
    async fn daily_closes(
        &self,
        symbol: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<PriceSeries> {
        let from = from.timestamp().to_string();
        let to = to.timestamp().to_string();
        let url = self.endpoint(
            "/stock/candle",
            &[
                ("symbol", symbol),
                ("resolution", "D"),
                ("from", from.as_str()),
                ("to", to.as_str()),
            ],
        )?;

        let candles: CandleResponse = self.get_json(url).await?;
        if !candles.is_ok() {
            debug!(symbol = %symbol, status = %candles.s, "FinnhubClient: no data for {}", symbol);
            return Ok(PriceSeries::empty());
        }

        let closes = candles.c.unwrap_or_default();
        if let Some(times) = &candles.t {
            if times.len() != closes.len() {
                return Err(ScanError::MalformedHistory {
                    symbol: symbol.to_string(),
                    reason: format!(
                        "{} timestamps for {} closes",
                        times.len(),
                        closes.len()
                    ),
                });
            }
        }
        PriceSeries::new(symbol, closes)
    }
}
