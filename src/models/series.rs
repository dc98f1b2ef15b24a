//! Daily close history for a single symbol

use crate::error::{Result, ScanError};

/// Oldest-first daily closing prices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    closes: Vec<f64>,
}

impl PriceSeries {
    /// Validate and wrap a close series. Every value must be finite and
    /// non-negative.
    pub fn new(symbol: &str, closes: Vec<f64>) -> Result<Self> {
        if let Some((index, value)) = closes
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            return Err(ScanError::MalformedHistory {
                symbol: symbol.to_string(),
                reason: format!("close at index {} is {}", index, value),
            });
        }
        Ok(Self { closes })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    /// Most recent close.
    pub fn last(&self) -> Option<f64> {
        self.closes.last().copied()
    }
}
