//! Unit tests for momentum ratio

use signalscan::indicators::momentum::{calculate_momentum, calculate_momentum_default};

#[test]
fn test_momentum_full_lookback() {
    // latest 110 vs 5 sessions earlier 100
    let closes = [90.0, 100.0, 101.0, 102.0, 103.0, 104.0, 110.0];
    let momentum = calculate_momentum_default(&closes).unwrap();
    assert!((momentum - 0.1).abs() < 1e-12);
}

#[test]
fn test_momentum_clamps_short_series() {
    // Only 3 closes: compares against the first one
    let momentum = calculate_momentum(&[50.0, 60.0, 75.0], 5).unwrap();
    assert!((momentum - 0.5).abs() < 1e-12);
}

#[test]
fn test_momentum_single_close_is_zero() {
    assert_eq!(calculate_momentum_default(&[42.0]), Some(0.0));
}

#[test]
fn test_momentum_empty_or_zero_reference() {
    assert!(calculate_momentum_default(&[]).is_none());
    assert!(calculate_momentum(&[0.0, 1.0], 5).is_none());
}

#[test]
fn test_momentum_flat_is_zero() {
    assert_eq!(calculate_momentum_default(&[100.0; 60]), Some(0.0));
}
