use crate::models::indicators::IndicatorSet;
use serde::{Deserialize, Serialize};

/// One satisfied scoring rule, kept for explainability in alerts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalReason {
    pub description: String,
    pub weight: f64,
}

/// Result of scoring one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalEvaluation {
    pub symbol: String,
    pub indicators: IndicatorSet,
    /// Rule-based score in `[0.0, 3.7]`.
    pub technical_score: f64,
    pub reasons: Vec<SignalReason>,
    /// Addend from the supplemental signal source (0.0 when inert).
    pub supplemental: f64,
    /// `technical_score + supplemental`, compared against the alert threshold.
    pub combined_score: f64,
}
