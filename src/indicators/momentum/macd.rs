//! MACD line (EMA divergence) indicator

use crate::common::math;
use crate::indicators::{MACD_FAST_PERIOD, MACD_SLOW_PERIOD};

/// MACD = EMA(fast) - EMA(slow), both at the latest close.
pub fn calculate_macd_divergence(
    closes: &[f64],
    fast_period: usize,
    slow_period: usize,
) -> Option<f64> {
    let fast_ema = math::ema(closes, fast_period)?;
    let slow_ema = math::ema(closes, slow_period)?;
    Some(fast_ema - slow_ema)
}

/// Calculate MACD with default periods (12, 26)
pub fn calculate_macd_divergence_default(closes: &[f64]) -> Option<f64> {
    calculate_macd_divergence(closes, MACD_FAST_PERIOD, MACD_SLOW_PERIOD)
}
