//! Monthly aggregation over the entry set.

use bolso_domain::{EntryKind, Ledger, MonthlyBudget};

use crate::error::CoreError;

const MIN_YEAR: i32 = 1900;
const MAX_YEAR: i32 = 2100;

/// Derives [`MonthlyBudget`] values from a ledger.
///
/// Pure read-and-derive: never mutates the ledger, and recomputing for an
/// unchanged ledger yields an identical result.
pub struct BudgetService;

impl BudgetService {
    /// Aggregates every entry dated within `month`/`year`.
    ///
    /// `spend_per_category` stays sparse: only categories with expense
    /// activity in the period appear.
    pub fn compute(ledger: &Ledger, month: u32, year: i32) -> Result<MonthlyBudget, CoreError> {
        validate_period(month, year)?;

        let mut budget = MonthlyBudget::empty(month, year);
        for entry in &ledger.entries {
            if entry.period() != (month, year) {
                continue;
            }
            match entry.kind {
                EntryKind::Income => budget.total_income += entry.amount,
                EntryKind::Expense => {
                    budget.total_expense += entry.amount;
                    *budget
                        .spend_per_category
                        .entry(entry.category.clone())
                        .or_insert(0.0) += entry.amount;
                }
            }
        }
        budget.balance = budget.total_income - budget.total_expense;
        Ok(budget)
    }
}

/// Checks month and year bounds shared by budget and alert derivation.
pub fn validate_period(month: u32, year: i32) -> Result<(), CoreError> {
    if !(1..=12).contains(&month) {
        return Err(CoreError::InvalidDate(format!(
            "month must be between 1 and 12, got {month}"
        )));
    }
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(CoreError::InvalidDate(format!(
            "year must be between {MIN_YEAR} and {MAX_YEAR}, got {year}"
        )));
    }
    Ok(())
}
