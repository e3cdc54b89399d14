//! Business logic helpers for entry management.

use chrono::{Datelike, NaiveDate};
use tracing::info;
use uuid::Uuid;

use bolso_domain::{normalize_name, Entry, EntryKind, Ledger, PaymentMethod};

use crate::error::CoreError;

/// Optional criteria for [`EntryService::list`].
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    /// Restrict to one month; without `year` it matches that month in any
    /// year.
    pub month: Option<u32>,
    pub year: Option<i32>,
    pub kind: Option<EntryKind>,
    pub category: Option<String>,
}

/// Provides validated operations for [`Entry`] values.
///
/// `add` is the smart constructor required by the model: an entry either
/// passes every check and lands in the ledger, or it never exists.
pub struct EntryService;

impl EntryService {
    /// Validates and records a new entry, returning its assigned id.
    pub fn add(
        ledger: &mut Ledger,
        kind: EntryKind,
        amount: f64,
        date: NaiveDate,
        category: &str,
        description: &str,
        payment_method: PaymentMethod,
    ) -> Result<Uuid, CoreError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(CoreError::InvalidAmount);
        }
        let description = description.trim();
        if description.is_empty() {
            return Err(CoreError::InvalidDescription);
        }
        let matched = ledger
            .category(category)
            .ok_or_else(|| CoreError::CategoryNotFound(category.trim().to_string()))?;
        if matched.kind != kind.category_kind() {
            return Err(CoreError::CategoryMismatch {
                name: matched.name.clone(),
                expected: kind.category_kind(),
                actual: matched.kind,
            });
        }

        let entry = Entry {
            id: Uuid::new_v4(),
            kind,
            amount,
            date,
            category: matched.name.clone(),
            description: description.to_string(),
            payment_method,
        };
        let id = entry.id;
        info!(%id, kind = %kind, amount, %date, "entry added");
        ledger.entries.push(entry);
        ledger.touch();
        Ok(id)
    }

    /// Removes an entry by id.
    pub fn remove(ledger: &mut Ledger, id: Uuid) -> Result<Entry, CoreError> {
        let position = ledger
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(CoreError::EntryNotFound(id))?;
        let removed = ledger.entries.remove(position);
        ledger.touch();
        info!(%id, "entry removed");
        Ok(removed)
    }

    /// Lists entries matching the filter, sorted by date with insertion
    /// order as the tie-break.
    pub fn list<'a>(ledger: &'a Ledger, filter: &EntryFilter) -> Vec<&'a Entry> {
        let category = filter.category.as_deref().map(normalize_name);
        let mut matched: Vec<&Entry> = ledger
            .entries
            .iter()
            .filter(|entry| match (filter.month, filter.year) {
                (Some(month), Some(year)) => entry.period() == (month, year),
                (Some(month), None) => entry.date.month() == month,
                (None, Some(year)) => entry.date.year() == year,
                (None, None) => true,
            })
            .filter(|entry| filter.kind.map_or(true, |kind| entry.kind == kind))
            .filter(|entry| {
                category
                    .as_deref()
                    .map_or(true, |wanted| normalize_name(&entry.category) == wanted)
            })
            .collect();
        matched.sort_by_key(|entry| entry.date);
        matched
    }
}
