//! Persistence abstraction and post-load integrity checks.

use bolso_domain::Ledger;

use crate::error::CoreError;

/// Abstraction over persistence backends capable of storing one ledger.
///
/// A store handle is opened once per invocation and passed explicitly to
/// every operation; there is no ambient global location.
pub trait LedgerStore {
    fn load(&self) -> Result<Ledger, CoreError>;
    fn save(&self, ledger: &Ledger) -> Result<(), CoreError>;
    fn exists(&self) -> bool;
}

/// Detects dangling references and kind mismatches within a loaded ledger.
///
/// Externally edited files can violate invariants the services enforce;
/// callers surface these as warnings rather than refusing the load.
pub fn ledger_warnings(ledger: &Ledger) -> Vec<String> {
    let mut warnings = Vec::new();
    for entry in &ledger.entries {
        match ledger.category(&entry.category) {
            None => warnings.push(format!(
                "entry {} references unknown category `{}`",
                entry.id, entry.category
            )),
            Some(category) if category.kind != entry.kind.category_kind() => {
                warnings.push(format!(
                    "entry {} is {} but category `{}` is {}",
                    entry.id, entry.kind, category.name, category.kind
                ));
            }
            Some(_) => {}
        }
        if !entry.amount.is_finite() || entry.amount <= 0.0 {
            warnings.push(format!(
                "entry {} has non-positive amount {}",
                entry.id, entry.amount
            ));
        }
    }
    warnings
}
