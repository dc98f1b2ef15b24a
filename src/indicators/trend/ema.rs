//! EMA (Exponential Moving Average) indicator

use crate::common::math;

/// EMA for a specific period, evaluated at the latest close.
pub fn calculate_ema(closes: &[f64], period: usize) -> Option<f64> {
    math::ema(closes, period)
}
