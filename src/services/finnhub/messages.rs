//! Finnhub response payloads

use serde::Deserialize;

/// Entry of `/stock/symbol`.
#[derive(Debug, Clone, Deserialize)]
pub struct SymbolEntry {
    pub symbol: String,
}

/// Body of `/stock/candle`. `s` is `"ok"` or `"no_data"`; the price arrays
/// are only present when `s == "ok"`.
#[derive(Debug, Clone, Deserialize)]
pub struct CandleResponse {
    pub s: String,
    #[serde(default)]
    pub c: Option<Vec<f64>>,
    #[serde(default)]
    pub t: Option<Vec<i64>>,
}

impl CandleResponse {
    pub fn is_ok(&self) -> bool {
        self.s == "ok"
    }
}
