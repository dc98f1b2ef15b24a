//! Unit tests for RSI indicator

use signalscan::indicators::momentum::{calculate_rsi, calculate_rsi_default};

#[test]
fn test_rsi_insufficient_data() {
    assert!(calculate_rsi_default(&[100.0; 14]).is_none());
    assert!(calculate_rsi_default(&[]).is_none());
    assert!(calculate_rsi_default(&[100.0; 15]).is_some());
}

#[test]
fn test_rsi_saturates_without_losses() {
    let closes: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
    assert_eq!(calculate_rsi_default(&closes), Some(100.0));
}

#[test]
fn test_rsi_flat_series_saturates() {
    // No losses at all, so the zero-loss rule applies
    assert_eq!(calculate_rsi_default(&[50.0; 30]), Some(100.0));
}

#[test]
fn test_rsi_only_losses_is_zero() {
    let closes: Vec<f64> = (0..20).map(|i| 100.0 - i as f64).collect();
    assert_eq!(calculate_rsi_default(&closes), Some(0.0));
}

#[test]
fn test_rsi_known_value() {
    // Deltas: +2, -1 → avg gain 1.0, avg loss 0.5, RS 2 → 66.666..
    let rsi = calculate_rsi(&[10.0, 12.0, 11.0], 2).unwrap();
    assert!((rsi - 200.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_rsi_uses_only_last_period_deltas() {
    // Early crash is outside the 2-delta window
    let rsi = calculate_rsi(&[100.0, 10.0, 11.0, 12.0], 2).unwrap();
    assert_eq!(rsi, 100.0);
}

#[test]
fn test_rsi_bounded() {
    let closes: Vec<f64> = (0..60)
        .map(|i| 100.0 + ((i * 37) % 17) as f64 - 8.0)
        .collect();
    for end in 15..=closes.len() {
        let rsi = calculate_rsi_default(&closes[..end]).unwrap();
        assert!((0.0..=100.0).contains(&rsi), "rsi out of range: {}", rsi);
    }
}
