//! Unit tests for pacing policies

use signalscan::core::pacing::{FixedDelay, NoPacing, Pacer};
use std::time::{Duration, Instant};

#[test]
fn test_no_pacing_returns_immediately() {
    let start = Instant::now();
    tokio_test::block_on(NoPacing.pause());
    assert!(start.elapsed() < Duration::from_millis(50));
}

#[tokio::test]
async fn test_fixed_delay_waits() {
    let pacer = FixedDelay(Duration::from_millis(30));
    let start = Instant::now();
    pacer.pause().await;
    assert!(start.elapsed() >= Duration::from_millis(30));
}

#[tokio::test]
async fn test_zero_delay_does_not_sleep() {
    let start = Instant::now();
    FixedDelay(Duration::ZERO).pause().await;
    assert!(start.elapsed() < Duration::from_millis(50));
}
