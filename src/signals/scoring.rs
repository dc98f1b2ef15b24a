//! Weighted rule scoring

use crate::common::math::round_to;
use crate::models::indicators::IndicatorSet;
use crate::models::signal::SignalReason;

/// Decimal places kept on every score.
pub const SCORE_DECIMALS: u32 = 3;

/// Sum of all rule weights.
pub const MAX_SCORE: f64 = 3.7;

const RSI_OVERBOUGHT: f64 = 70.0;

/// A bullish condition and the weight it contributes when it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoringRule {
    PriceAboveLongSma,
    ShortSmaAboveLongSma,
    RsiNotOverbought,
    PositiveMacd,
    PositiveMomentum,
}

impl ScoringRule {
    pub const ALL: [ScoringRule; 5] = [
        ScoringRule::PriceAboveLongSma,
        ScoringRule::ShortSmaAboveLongSma,
        ScoringRule::RsiNotOverbought,
        ScoringRule::PositiveMacd,
        ScoringRule::PositiveMomentum,
    ];

    pub fn weight(self) -> f64 {
        match self {
            ScoringRule::PriceAboveLongSma => 1.0,
            ScoringRule::ShortSmaAboveLongSma => 1.0,
            ScoringRule::RsiNotOverbought => 0.5,
            ScoringRule::PositiveMacd => 0.7,
            ScoringRule::PositiveMomentum => 0.5,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ScoringRule::PriceAboveLongSma => "Close above SMA50",
            ScoringRule::ShortSmaAboveLongSma => "SMA10 above SMA50",
            ScoringRule::RsiNotOverbought => "RSI below 70",
            ScoringRule::PositiveMacd => "MACD positive",
            ScoringRule::PositiveMomentum => "5-day momentum positive",
        }
    }

    /// Whether the condition holds. Absent inputs never satisfy a rule.
    pub fn holds(self, ind: &IndicatorSet) -> bool {
        match self {
            ScoringRule::PriceAboveLongSma => {
                matches!((ind.last_close, ind.sma_long), (Some(close), Some(long)) if close > long)
            }
            ScoringRule::ShortSmaAboveLongSma => {
                matches!((ind.sma_short, ind.sma_long), (Some(short), Some(long)) if short > long)
            }
            ScoringRule::RsiNotOverbought => ind.rsi.is_some_and(|rsi| rsi < RSI_OVERBOUGHT),
            ScoringRule::PositiveMacd => ind.macd.is_some_and(|macd| macd > 0.0),
            ScoringRule::PositiveMomentum => ind.momentum.is_some_and(|m| m > 0.0),
        }
    }
}

/// Rules that hold for this indicator set, in table order.
pub fn satisfied_rules(ind: &IndicatorSet) -> Vec<ScoringRule> {
    ScoringRule::ALL
        .into_iter()
        .filter(|rule| rule.holds(ind))
        .collect()
}

/// Technical score: sum of holding weights, rounded to 3 places.
pub fn score(ind: &IndicatorSet) -> f64 {
    let total: f64 = satisfied_rules(ind).into_iter().map(ScoringRule::weight).sum();
    round_to(total, SCORE_DECIMALS)
}

/// Explainability breakdown for alerts.
pub fn reasons(ind: &IndicatorSet) -> Vec<SignalReason> {
    satisfied_rules(ind)
        .into_iter()
        .map(|rule| SignalReason {
            description: rule.description().to_string(),
            weight: rule.weight(),
        })
        .collect()
}

/// Technical score plus the supplemental addend, rounded like the score.
pub fn combine(technical: f64, supplemental: f64) -> f64 {
    round_to(technical + supplemental, SCORE_DECIMALS)
}
