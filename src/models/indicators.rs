use serde::{Deserialize, Serialize};

/// Indicator snapshot at the most recent close.
///
/// Any field may be absent when the history is too short for its window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_close: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma_short: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma_long: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub momentum: Option<f64>,
}

impl IndicatorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_last_close(mut self, last_close: f64) -> Self {
        self.last_close = Some(last_close);
        self
    }

    pub fn with_sma_short(mut self, sma_short: f64) -> Self {
        self.sma_short = Some(sma_short);
        self
    }

    pub fn with_sma_long(mut self, sma_long: f64) -> Self {
        self.sma_long = Some(sma_long);
        self
    }

    pub fn with_rsi(mut self, rsi: f64) -> Self {
        self.rsi = Some(rsi);
        self
    }

    pub fn with_macd(mut self, macd: f64) -> Self {
        self.macd = Some(macd);
        self
    }

    pub fn with_momentum(mut self, momentum: f64) -> Self {
        self.momentum = Some(momentum);
        self
    }
}
