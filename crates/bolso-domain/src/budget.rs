//! Derived monthly aggregates.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Aggregate of all entries within one month/year.
///
/// Always derived from the current entry set, never stored or mutated in
/// place. `spend_per_category` is sparse: categories without expense
/// activity in the period are absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyBudget {
    pub month: u32,
    pub year: i32,
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
    pub spend_per_category: BTreeMap<String, f64>,
}

impl MonthlyBudget {
    /// An aggregate with no activity.
    pub fn empty(month: u32, year: i32) -> Self {
        Self {
            month,
            year,
            total_income: 0.0,
            total_expense: 0.0,
            balance: 0.0,
            spend_per_category: BTreeMap::new(),
        }
    }

    pub fn has_deficit(&self) -> bool {
        self.balance < 0.0
    }

    /// Spend accumulated for a category this month, zero when absent.
    pub fn category_spend(&self, name: &str) -> f64 {
        self.spend_per_category.get(name).copied().unwrap_or(0.0)
    }

    pub fn display_label(&self) -> String {
        format!(
            "Budget {:02}/{} - income {:.2} | expense {:.2} | balance {:.2}",
            self.month, self.year, self.total_income, self.total_expense, self.balance
        )
    }
}
