//! Unit tests for SMA indicator

use signalscan::indicators::trend::calculate_sma;

fn rising(count: usize) -> Vec<f64> {
    (0..count).map(|i| 100.0 + i as f64).collect()
}

#[test]
fn test_sma_insufficient_data() {
    assert!(calculate_sma(&rising(9), 10).is_none());
    assert!(calculate_sma(&[], 1).is_none());
}

#[test]
fn test_sma_value() {
    // last 10 of 100..=119 are 110..=119
    assert_eq!(calculate_sma(&rising(20), 10), Some(114.5));
}
