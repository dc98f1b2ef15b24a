//! Pacing between symbols to stay under provider rate limits

use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait Pacer: Send + Sync {
    /// Wait before the next symbol is processed.
    async fn pause(&self);
}

/// Sleep for a fixed delay.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

#[async_trait]
impl Pacer for FixedDelay {
    async fn pause(&self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}

/// No waiting at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacing;

#[async_trait]
impl Pacer for NoPacing {
    async fn pause(&self) {}
}
