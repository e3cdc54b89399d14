//! The authoritative in-memory store of categories and entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    category::{normalize_name, Category},
    entry::Entry,
};

/// Owns the collections of categories (unique by normalized name) and
/// entries (insertion order, unique ids).
///
/// The ledger itself is a plain data holder; invariant-checked mutation
/// lives in the service layer of `bolso-core`, which is the only intended
/// writer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub entries: Vec<Entry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ledger {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            categories: Vec::new(),
            entries: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Records a modification timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Looks up a category by name, case-insensitively.
    pub fn category(&self, name: &str) -> Option<&Category> {
        let needle = normalize_name(name);
        self.categories
            .iter()
            .find(|category| category.normalized_name() == needle)
    }

    pub fn entry(&self, id: Uuid) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Entries referencing the named category.
    pub fn entries_for_category(&self, name: &str) -> impl Iterator<Item = &Entry> {
        let needle = normalize_name(name);
        self.entries
            .iter()
            .filter(move |entry| normalize_name(&entry.category) == needle)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.entries.is_empty()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
