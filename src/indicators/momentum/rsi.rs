//! RSI (Relative Strength Index) indicator

use crate::indicators::RSI_PERIOD;

/// Calculate RSI at the latest close.
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss over the last `period` deltas
///
/// Saturates at 100 when there were no losses in the window.
pub fn calculate_rsi(closes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || closes.len() < period + 1 {
        return None;
    }

    let window = &closes[closes.len() - (period + 1)..];
    let (gains, losses) = window
        .windows(2)
        .map(|pair| pair[1] - pair[0])
        .fold((0.0, 0.0), |(gains, losses), change| {
            if change > 0.0 {
                (gains + change, losses)
            } else {
                (gains, losses - change)
            }
        });

    let avg_gain = gains / period as f64;
    let avg_loss = losses / period as f64;

    if avg_loss == 0.0 {
        return Some(100.0);
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - (100.0 / (1.0 + rs)))
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(closes: &[f64]) -> Option<f64> {
    calculate_rsi(closes, RSI_PERIOD)
}
