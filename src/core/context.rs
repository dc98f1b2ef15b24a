//! Scan context for dependency injection

use crate::core::pacing::Pacer;
use crate::services::market_data::{PriceHistoryProvider, SymbolUniverse};
use crate::services::notifier::Notifier;
use crate::signals::supplemental::SupplementalSignal;
use std::sync::Arc;

/// Everything the scan loop talks to outside its own process.
#[derive(Clone)]
pub struct ScanContext {
    pub universe: Arc<dyn SymbolUniverse>,
    pub history: Arc<dyn PriceHistoryProvider>,
    pub notifier: Arc<dyn Notifier>,
    pub supplemental: Arc<dyn SupplementalSignal>,
    pub pacer: Arc<dyn Pacer>,
}

impl ScanContext {
    pub fn new(
        universe: Arc<dyn SymbolUniverse>,
        history: Arc<dyn PriceHistoryProvider>,
        notifier: Arc<dyn Notifier>,
        supplemental: Arc<dyn SupplementalSignal>,
        pacer: Arc<dyn Pacer>,
    ) -> Self {
        Self {
            universe,
            history,
            notifier,
            supplemental,
            pacer,
        }
    }
}
