//! Indicator library: pure functions over oldest-first close series.
//!
//! Every function returns `None` when the series is too short for its
//! window instead of failing.

pub mod momentum;
pub mod trend;

pub const SHORT_SMA_PERIOD: usize = 10;
pub const LONG_SMA_PERIOD: usize = 50;
pub const RSI_PERIOD: usize = 14;
pub const MACD_FAST_PERIOD: usize = 12;
pub const MACD_SLOW_PERIOD: usize = 26;
pub const MOMENTUM_PERIOD: usize = 5;

pub use momentum::*;
pub use trend::*;
