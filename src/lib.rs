//! Signalscan: a batch scanner that scores daily equity price history and
//! posts webhook alerts when a symbol's combined score crosses a threshold.

pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;

pub use error::{ConfigError, Result, ScanError};
