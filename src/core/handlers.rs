//! Per-symbol pipeline: fetch, score, gate, dispatch, record.

use crate::config::ScanSettings;
use crate::core::context::ScanContext;
use crate::error::Result;
use crate::ledger::AlertLedger;
use crate::models::alert::AlertMessage;
use crate::signals::engine::{SignalEngine, MIN_HISTORY};
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};

/// How a symbol's pass through the pipeline ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolOutcome {
    /// Fewer than [`MIN_HISTORY`] closes.
    InsufficientData,
    BelowThreshold { combined_score: f64 },
    /// Qualified but alerted too recently.
    CoolingDown { combined_score: f64 },
    Alerted { combined_score: f64 },
    /// Qualified, but the notifier failed. The ledger is left untouched so
    /// the next run retries.
    DispatchFailed { combined_score: f64 },
}

/// Run one symbol through the pipeline.
///
/// Errors are per-symbol (fetch failure, malformed history); the caller logs
/// them and moves on.
pub async fn evaluate_symbol(
    ctx: &ScanContext,
    settings: &ScanSettings,
    symbol: &str,
    ledger: &mut AlertLedger,
    now: DateTime<Utc>,
) -> Result<SymbolOutcome> {
    let from = now - Duration::days(settings.history_days);
    let series = ctx.history.daily_closes(symbol, from, now).await?;

    let evaluation =
        match SignalEngine::evaluate(symbol, &series, ctx.supplemental.as_ref()).await {
            Some(evaluation) => evaluation,
            None => {
                debug!(
                    symbol = %symbol,
                    count = series.len(),
                    min = MIN_HISTORY,
                    "Scan: not enough history ({} < {}) for {}",
                    series.len(),
                    MIN_HISTORY,
                    symbol
                );
                return Ok(SymbolOutcome::InsufficientData);
            }
        };
    let combined_score = evaluation.combined_score;

    debug!(
        symbol = %symbol,
        technical = evaluation.technical_score,
        combined = combined_score,
        "Scan: {} scored {:.3}",
        symbol,
        combined_score
    );

    if combined_score < settings.alert_threshold {
        return Ok(SymbolOutcome::BelowThreshold { combined_score });
    }

    if !ledger.may_alert(symbol, settings.cooldown, now) {
        debug!(
            symbol = %symbol,
            score = combined_score,
            last_alerted = ?ledger.last_alerted(symbol),
            "Scan: {} qualifies but is cooling down",
            symbol
        );
        return Ok(SymbolOutcome::CoolingDown { combined_score });
    }

    let alert = AlertMessage::from_evaluation(&evaluation, now);
    match ctx.notifier.send(&alert).await {
        Ok(()) => {
            ledger.record(symbol, now);
            info!(
                symbol = %symbol,
                score = combined_score,
                "Scan: alert sent for {} (score {:.3})",
                symbol,
                combined_score
            );
            Ok(SymbolOutcome::Alerted { combined_score })
        }
        Err(e) => {
            warn!(
                symbol = %symbol,
                score = combined_score,
                error = %e,
                "Scan: failed to deliver alert for {}",
                symbol
            );
            Ok(SymbolOutcome::DispatchFailed { combined_score })
        }
    }
}
