//! Finnhub REST client for symbols and daily candles

pub mod client;
pub mod messages;

pub use client::FinnhubClient;
