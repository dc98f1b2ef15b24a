//! Market data provider interfaces.

use crate::error::Result;
use crate::models::series::PriceSeries;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait SymbolUniverse: Send + Sync {
    /// All tradable symbols listed on `exchange`, in provider order.
    async fn list_symbols(&self, exchange: &str) -> Result<Vec<String>>;
}

#[async_trait]
pub trait PriceHistoryProvider: Send + Sync {
    /// Daily closes for `symbol` between `from` and `to`, oldest first.
    ///
    /// An empty series means the provider had no usable data.
    async fn daily_closes(
        &self,
        symbol: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<PriceSeries>;
}

/// Drop share-class identifiers (anything containing `.`) and keep at most
/// `max` symbols.
pub fn filter_universe(symbols: Vec<String>, max: usize) -> Vec<String> {
    symbols
        .into_iter()
        .filter(|s| !s.is_empty() && !s.contains('.'))
        .take(max)
        .collect()
}
