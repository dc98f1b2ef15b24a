//! SMA (Simple Moving Average) indicator

use crate::common::math;

/// Average of the last `period` closes.
pub fn calculate_sma(closes: &[f64], period: usize) -> Option<f64> {
    math::sma(closes, period)
}
