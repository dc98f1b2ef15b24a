//! Outgoing alert payload

use crate::models::signal::SignalEvaluation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Embed color for bullish alerts (green).
pub const ALERT_COLOR: u32 = 0x2E_CC_71;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertMessage {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub timestamp: DateTime<Utc>,
}

impl AlertMessage {
    pub fn from_evaluation(evaluation: &SignalEvaluation, timestamp: DateTime<Utc>) -> Self {
        let ind = &evaluation.indicators;
        let mut lines = vec![
            format!("**Combined score:** {:.3}", evaluation.combined_score),
            format!("**Technical score:** {:.3}", evaluation.technical_score),
            format!("Close: {}", fmt_value(ind.last_close, 2)),
            format!("SMA10: {}", fmt_value(ind.sma_short, 2)),
            format!("SMA50: {}", fmt_value(ind.sma_long, 2)),
            format!("RSI14: {}", fmt_value(ind.rsi, 1)),
            format!("MACD: {}", fmt_value(ind.macd, 4)),
            format!("Momentum 5d: {}", fmt_pct(ind.momentum)),
        ];
        if evaluation.supplemental != 0.0 {
            lines.insert(2, format!("Supplemental: {:+.3}", evaluation.supplemental));
        }
        if !evaluation.reasons.is_empty() {
            lines.push(String::new());
            lines.extend(
                evaluation
                    .reasons
                    .iter()
                    .map(|r| format!("• {} (+{:.1})", r.description, r.weight)),
            );
        }

        Self {
            title: format!("📈 {} signal", evaluation.symbol),
            description: lines.join("\n"),
            color: ALERT_COLOR,
            timestamp,
        }
    }
}

fn fmt_value(value: Option<f64>, decimals: usize) -> String {
    value
        .map(|v| format!("{:.*}", decimals, v))
        .unwrap_or_else(|| "n/a".to_string())
}

fn fmt_pct(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:+.2}%", v * 100.0))
        .unwrap_or_else(|| "n/a".to_string())
}
