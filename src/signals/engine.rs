//! Signal evaluation engine: indicators, then score.

use crate::indicators::{
    calculate_macd_divergence_default, calculate_momentum_default, calculate_rsi_default,
    calculate_sma, LONG_SMA_PERIOD, SHORT_SMA_PERIOD,
};
use crate::models::indicators::IndicatorSet;
use crate::models::series::PriceSeries;
use crate::models::signal::SignalEvaluation;
use crate::signals::scoring;
use crate::signals::supplemental::SupplementalSignal;

/// Series shorter than this are skipped as insufficient data.
pub const MIN_HISTORY: usize = 30;

pub struct SignalEngine;

impl SignalEngine {
    /// Compute every indicator at the latest close.
    pub fn compute_indicators(series: &PriceSeries) -> IndicatorSet {
        let closes = series.closes();
        IndicatorSet {
            last_close: series.last(),
            sma_short: calculate_sma(closes, SHORT_SMA_PERIOD),
            sma_long: calculate_sma(closes, LONG_SMA_PERIOD),
            rsi: calculate_rsi_default(closes),
            macd: calculate_macd_divergence_default(closes),
            momentum: calculate_momentum_default(closes),
        }
    }

    /// Score a symbol's history. `None` when there are fewer than
    /// [`MIN_HISTORY`] closes; the supplemental source is not consulted then.
    pub async fn evaluate(
        symbol: &str,
        series: &PriceSeries,
        supplemental: &dyn SupplementalSignal,
    ) -> Option<SignalEvaluation> {
        if series.len() < MIN_HISTORY {
            return None;
        }
        let indicators = Self::compute_indicators(series);
        let contribution = supplemental.contribution(symbol, &indicators).await;
        Some(Self::evaluate_indicators(symbol, indicators, contribution))
    }

    pub fn evaluate_indicators(
        symbol: &str,
        indicators: IndicatorSet,
        supplemental: f64,
    ) -> SignalEvaluation {
        let technical_score = scoring::score(&indicators);
        SignalEvaluation {
            symbol: symbol.to_string(),
            indicators,
            technical_score,
            reasons: scoring::reasons(&indicators),
            supplemental,
            combined_score: scoring::combine(technical_score, supplemental),
        }
    }
}
