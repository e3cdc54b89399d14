//! Domain types representing entry categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classifies ledger entries for budgeting and reporting.
///
/// Names are unique per ledger (case-insensitively). Expense categories may
/// carry a monthly spending limit; income categories never do.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub name: String,
    pub kind: CategoryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_limit: Option<f64>,
}

impl Category {
    pub fn new(name: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            name: name.into(),
            kind,
            monthly_limit: None,
        }
    }

    pub fn with_limit(mut self, limit: f64) -> Self {
        self.monthly_limit = Some(limit);
        self
    }

    /// Returns `true` when the category has a spending limit assigned.
    pub fn has_limit(&self) -> bool {
        self.monthly_limit.is_some()
    }

    /// Name lowered for case-insensitive comparisons.
    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }

    pub fn display_label(&self) -> String {
        match self.monthly_limit {
            Some(limit) => format!("{} ({}, limit {:.2})", self.name, self.kind, limit),
            None => format!("{} ({})", self.name, self.kind),
        }
    }
}

/// Canonical form used for uniqueness checks and lookups.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Supported category types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CategoryKind {
    Income,
    Expense,
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CategoryKind::Income => "Income",
            CategoryKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}
