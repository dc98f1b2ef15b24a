//! Shared data models spanning the engine layers.

pub mod alert;
pub mod indicators;
pub mod series;
pub mod signal;

pub use alert::AlertMessage;
pub use indicators::IndicatorSet;
pub use series::PriceSeries;
pub use signal::{SignalEvaluation, SignalReason};
