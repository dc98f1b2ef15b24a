//! Rate of change (momentum ratio)

use crate::indicators::MOMENTUM_PERIOD;

/// Fractional change between the latest close and the close `period`
/// sessions earlier: `(latest - past) / past`.
///
/// The lookback is clamped to the first close when the series is shorter
/// than `period + 1`, so short series still yield a (shorter-horizon) value.
/// Returns `None` for an empty series or a zero reference close.
pub fn calculate_momentum(closes: &[f64], period: usize) -> Option<f64> {
    let latest = *closes.last()?;
    let past = closes[closes.len().saturating_sub(period + 1)];
    if past == 0.0 {
        return None;
    }
    Some((latest - past) / past)
}

/// Calculate momentum with default lookback (5)
pub fn calculate_momentum_default(closes: &[f64]) -> Option<f64> {
    calculate_momentum(closes, MOMENTUM_PERIOD)
}
