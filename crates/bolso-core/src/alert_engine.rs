//! Rule evaluation producing budget alerts.

use bolso_domain::{Alert, EntryKind, Ledger};

use crate::{budget_service::BudgetService, error::CoreError};

/// Expense amount above which a single entry raises an alert.
pub const HIGH_VALUE_THRESHOLD: f64 = 500.0;

/// Evaluates the fixed alert rule set against a ledger and period.
///
/// Pure read-and-derive: alerts are generated fresh on every call and
/// nothing is mutated.
pub struct AlertEngine;

impl AlertEngine {
    /// Runs all rules for `month`/`year` in fixed order: high-value
    /// expenses (entry insertion order), exceeded category limits
    /// (category insertion order), then a single deficit check.
    pub fn evaluate(ledger: &Ledger, month: u32, year: i32) -> Result<Vec<Alert>, CoreError> {
        let budget = BudgetService::compute(ledger, month, year)?;
        let mut alerts = Vec::new();

        for entry in &ledger.entries {
            if entry.kind == EntryKind::Expense
                && entry.period() == (month, year)
                && entry.amount > HIGH_VALUE_THRESHOLD
            {
                alerts.push(Alert::high_value(entry.id, entry.amount));
            }
        }

        for category in &ledger.categories {
            if let Some(limit) = category.monthly_limit {
                let spend = budget.category_spend(&category.name);
                if spend > limit {
                    alerts.push(Alert::limit_exceeded(
                        &category.name,
                        limit,
                        spend,
                        (month, year),
                    ));
                }
            }
        }

        if budget.has_deficit() {
            alerts.push(Alert::deficit(month, year, budget.balance));
        }

        Ok(alerts)
    }
}
