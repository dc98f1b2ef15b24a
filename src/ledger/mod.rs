//! Alert ledger: symbol → time of the last delivered alert.
//!
//! Loaded once per run, mutated in memory, saved once at the end.

use crate::error::{Result, ScanError};
use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct AlertLedger {
    path: PathBuf,
    entries: BTreeMap<String, DateTime<Utc>>,
}

impl AlertLedger {
    /// Empty ledger bound to `path`, nothing read from disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Load the ledger stored at `path`.
    ///
    /// A missing file yields an empty ledger. An unreadable or corrupt file
    /// is logged and replaced by an empty ledger; it gets overwritten on the
    /// next [`save`](Self::save).
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "AlertLedger: no state file, starting empty");
                return Self::new(path);
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "AlertLedger: failed to read state file, starting empty"
                );
                return Self::new(path);
            }
        };

        match serde_json::from_str::<BTreeMap<String, DateTime<Utc>>>(&raw) {
            Ok(entries) => {
                debug!(
                    path = %path.display(),
                    entries = entries.len(),
                    "AlertLedger: loaded {} entries",
                    entries.len()
                );
                Self { path, entries }
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "AlertLedger: state file is corrupt, starting empty"
                );
                Self::new(path)
            }
        }
    }

    /// Whether `symbol` is outside its cooldown window at `now`.
    pub fn may_alert(&self, symbol: &str, cooldown: Duration, now: DateTime<Utc>) -> bool {
        match self.entries.get(symbol) {
            None => true,
            Some(&last) => now - last >= cooldown,
        }
    }

    /// Remember that `symbol` was alerted at `now`. In memory only.
    pub fn record(&mut self, symbol: &str, now: DateTime<Utc>) {
        self.entries.insert(symbol.to_string(), now);
    }

    pub fn last_alerted(&self, symbol: &str) -> Option<DateTime<Utc>> {
        self.entries.get(symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist the whole map, replacing any previous file.
    ///
    /// Written to a sibling temp file first and renamed into place.
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, json).map_err(|e| {
            ScanError::Ledger(format!("failed to write {}: {}", tmp.display(), e))
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            ScanError::Ledger(format!(
                "failed to move {} into {}: {}",
                tmp.display(),
                self.path.display(),
                e
            ))
        })?;

        info!(
            path = %self.path.display(),
            entries = self.entries.len(),
            "AlertLedger: saved {} entries",
            self.entries.len()
        );
        Ok(())
    }
}
