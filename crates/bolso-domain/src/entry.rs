//! Domain models for financial entries.

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::category::CategoryKind;

/// A single recorded financial movement.
///
/// Income and expense entries share every field; they differ only in the
/// sign they contribute to balances and in which category kind they may
/// reference, both derived from [`EntryKind`]. Entries are immutable after
/// creation; corrections happen by delete-and-recreate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    pub id: Uuid,
    pub kind: EntryKind,
    pub amount: f64,
    pub date: NaiveDate,
    /// Name of the referenced category (non-owning).
    pub category: String,
    pub description: String,
    pub payment_method: PaymentMethod,
}

impl Entry {
    /// The `(month, year)` pair the entry belongs to.
    pub fn period(&self) -> (u32, i32) {
        (self.date.month(), self.date.year())
    }

    /// Contribution to a balance: `+amount` for income, `-amount` for expense.
    pub fn signed_amount(&self) -> f64 {
        f64::from(self.kind.sign()) * self.amount
    }

    pub fn display_label(&self) -> String {
        format!(
            "{}: {:.2} - {} ({}) [{}]",
            self.kind, self.amount, self.description, self.date, self.category
        )
    }
}

/// Discriminates income from expense entries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    /// Sign contributed to aggregate balances.
    pub fn sign(self) -> i8 {
        match self {
            EntryKind::Income => 1,
            EntryKind::Expense => -1,
        }
    }

    /// The category kind an entry of this kind may reference.
    pub fn category_kind(self) -> CategoryKind {
        match self {
            EntryKind::Income => CategoryKind::Income,
            EntryKind::Expense => CategoryKind::Expense,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntryKind::Income => "Income",
            EntryKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

/// Fixed set of accepted payment methods.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum PaymentMethod {
    Pix,
    Credit,
    Debit,
    Cash,
    Transfer,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentMethod::Pix => "pix",
            PaymentMethod::Credit => "credit",
            PaymentMethod::Debit => "debit",
            PaymentMethod::Cash => "cash",
            PaymentMethod::Transfer => "transfer",
        };
        f.write_str(label)
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "pix" => Ok(PaymentMethod::Pix),
            "credit" => Ok(PaymentMethod::Credit),
            "debit" => Ok(PaymentMethod::Debit),
            "cash" => Ok(PaymentMethod::Cash),
            "transfer" => Ok(PaymentMethod::Transfer),
            other => Err(format!("unknown payment method `{other}`")),
        }
    }
}
