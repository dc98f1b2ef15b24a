//! Scan runtime: one sequential pass over the symbol universe

use crate::config::{ScanConfig, ScanSettings};
use crate::core::context::ScanContext;
use crate::core::handlers::{evaluate_symbol, SymbolOutcome};
use crate::error::Result;
use crate::ledger::AlertLedger;
use crate::services::market_data::filter_universe;
use chrono::Utc;
use std::path::PathBuf;
use tracing::{info, warn};

/// What happened during one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanReport {
    /// Every symbol attempted, in order.
    pub processed: Vec<String>,
    /// Symbols whose alert was delivered.
    pub alerted: Vec<String>,
    /// Symbols skipped for insufficient history.
    pub skipped: usize,
    /// Symbols whose pipeline returned an error.
    pub failed: Vec<String>,
}

impl ScanReport {
    pub fn alert_count(&self) -> usize {
        self.alerted.len()
    }
}

pub struct ScanRuntime {
    context: ScanContext,
    settings: ScanSettings,
    ledger_path: PathBuf,
}

impl ScanRuntime {
    pub fn new(context: ScanContext, settings: ScanSettings, ledger_path: impl Into<PathBuf>) -> Self {
        Self {
            context,
            settings,
            ledger_path: ledger_path.into(),
        }
    }

    pub fn from_config(context: ScanContext, config: &ScanConfig) -> Self {
        Self::new(
            context,
            config.settings.clone(),
            config.alert_state_path.clone(),
        )
    }

    /// Full run: universe, ledger load, scan, ledger save.
    ///
    /// Failing to fetch the universe or to save the ledger is fatal. Nothing
    /// that happens to an individual symbol is.
    pub async fn run(&self) -> Result<ScanReport> {
        let listed = self
            .context
            .universe
            .list_symbols(&self.settings.exchange)
            .await?;
        let listed_count = listed.len();
        let symbols = filter_universe(listed, self.settings.max_symbols);
        info!(
            exchange = %self.settings.exchange,
            listed = listed_count,
            scanning = symbols.len(),
            "ScanRuntime: scanning {} of {} listed symbols",
            symbols.len(),
            listed_count
        );

        let mut ledger = AlertLedger::load(&self.ledger_path);
        let report = self.scan(&symbols, &mut ledger).await;
        ledger.save()?;

        info!(
            processed = report.processed.len(),
            alerted = report.alert_count(),
            skipped = report.skipped,
            failed = report.failed.len(),
            "ScanRuntime: run complete, {} alerts sent",
            report.alert_count()
        );
        Ok(report)
    }

    /// Process `symbols` in order against an already loaded ledger.
    pub async fn scan(&self, symbols: &[String], ledger: &mut AlertLedger) -> ScanReport {
        let mut report = ScanReport::default();

        for (index, symbol) in symbols.iter().enumerate() {
            if index > 0 {
                self.context.pacer.pause().await;
            }
            report.processed.push(symbol.clone());

            match evaluate_symbol(&self.context, &self.settings, symbol, ledger, Utc::now()).await {
                Ok(SymbolOutcome::Alerted { .. }) => report.alerted.push(symbol.clone()),
                Ok(SymbolOutcome::InsufficientData) => report.skipped += 1,
                Ok(_) => {}
                Err(e) => {
                    warn!(symbol = %symbol, error = %e, "ScanRuntime: skipping {}", symbol);
                    report.failed.push(symbol.clone());
                }
            }
        }

        report
    }
}
