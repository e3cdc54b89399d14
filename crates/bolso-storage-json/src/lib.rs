//! Filesystem-backed JSON persistence for a single ledger file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{info, warn};

use bolso_core::{CoreError, LedgerStore};
use bolso_domain::Ledger;

const TMP_SUFFIX: &str = "tmp";

/// Stores one ledger as a JSON document at a fixed path.
///
/// Saves are atomic: the document is written to a sibling `.tmp` file and
/// renamed over the target, so a crash mid-write never corrupts the store.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the store file with an empty ledger unless it already exists.
    pub fn initialize(&self) -> Result<Ledger, CoreError> {
        if self.exists() {
            return self.load();
        }
        let ledger = Ledger::new();
        self.save(&ledger)?;
        info!(path = %self.path.display(), "store initialized");
        Ok(ledger)
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".");
        name.push(TMP_SUFFIX);
        self.path.with_file_name(name)
    }
}

impl LedgerStore for JsonStore {
    fn load(&self) -> Result<Ledger, CoreError> {
        let data = fs::read_to_string(&self.path).map_err(|err| {
            CoreError::Storage(format!("cannot read {}: {err}", self.path.display()))
        })?;
        let ledger: Ledger = serde_json::from_str(&data)
            .map_err(|err| CoreError::Storage(format!("malformed ledger file: {err}")))?;
        for warning in bolso_core::ledger_warnings(&ledger) {
            warn!(%warning, "ledger integrity");
        }
        Ok(ledger)
    }

    fn save(&self, ledger: &Ledger) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let data = serde_json::to_string_pretty(ledger)
            .map_err(|err| CoreError::Storage(err.to_string()))?;
        let tmp = self.tmp_path();
        fs::write(&tmp, data)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}
