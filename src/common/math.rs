//! Numeric helpers for the indicator library

/// Simple mean of the last `period` values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    Some(window.iter().sum::<f64>() / period as f64)
}

/// Smoothing factor `2 / (period + 1)`.
pub fn ema_multiplier(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// Advance an EMA by one value.
pub fn ema_from_previous(value: f64, previous: f64, period: usize) -> f64 {
    (value - previous) * ema_multiplier(period) + previous
}

/// EMA at the most recent point.
///
/// Seeded with the mean of the first `period` values, then the recurrence is
/// folded over every later value in order, so the result depends on the
/// whole history and not just a trailing window.
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let seed = values[..period].iter().sum::<f64>() / period as f64;
    Some(
        values[period..]
            .iter()
            .fold(seed, |prev, &value| ema_from_previous(value, prev, period)),
    )
}

/// Round to `places` decimals by multiply, `f64::round`, divide.
///
/// `f64::round` rounds half away from zero, i.e. half-up for the
/// non-negative scores this crate produces.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
