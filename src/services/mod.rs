//! External collaborators: symbol universe, price history, notifications.

pub mod finnhub;
pub mod market_data;
pub mod notifier;

pub use finnhub::FinnhubClient;
pub use market_data::{filter_universe, PriceHistoryProvider, SymbolUniverse};
pub use notifier::{DiscordNotifier, Notifier};
