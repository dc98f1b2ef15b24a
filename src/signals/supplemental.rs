//! Extra signal added on top of the technical score.
//!
//! The combined score is `technical + contribution`. Swapping in a real
//! source (news sentiment, for example) does not touch the scoring rules.

use crate::models::indicators::IndicatorSet;
use async_trait::async_trait;

#[async_trait]
pub trait SupplementalSignal: Send + Sync {
    /// Addend for this symbol. Sources that cannot produce a value should
    /// return `0.0`.
    async fn contribution(&self, symbol: &str, indicators: &IndicatorSet) -> f64;
}

/// Inert source that always contributes zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralSentiment;

#[async_trait]
impl SupplementalSignal for NeutralSentiment {
    async fn contribution(&self, _symbol: &str, _indicators: &IndicatorSet) -> f64 {
        0.0
    }
}
