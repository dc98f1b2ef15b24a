//! Alert delivery

pub mod discord;

use crate::error::Result;
use crate::models::alert::AlertMessage;
use async_trait::async_trait;

pub use discord::DiscordNotifier;

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one alert. Not retried by the caller.
    async fn send(&self, alert: &AlertMessage) -> Result<()>;
}
