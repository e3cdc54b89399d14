//! Derived budget alerts.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A derived notice about a high-value expense, an exceeded category limit,
/// or a negative monthly balance.
///
/// Alerts are ephemeral: generated fresh per evaluation and never stored as
/// mutable state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    pub kind: AlertKind,
    pub severity: Severity,
    pub message: String,
    /// Entry that triggered the alert, when entry-scoped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_id: Option<Uuid>,
    /// Category that triggered the alert, when category-scoped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// `(month, year)` the alert refers to, when period-scoped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<(u32, i32)>,
}

impl Alert {
    pub fn high_value(entry_id: Uuid, amount: f64) -> Self {
        Self {
            kind: AlertKind::HighValue,
            severity: AlertKind::HighValue.severity(),
            message: format!("High-value expense recorded: {amount:.2}"),
            entry_id: Some(entry_id),
            category: None,
            period: None,
        }
    }

    pub fn limit_exceeded(category: &str, limit: f64, spend: f64, period: (u32, i32)) -> Self {
        Self {
            kind: AlertKind::LimitExceeded,
            severity: AlertKind::LimitExceeded.severity(),
            message: format!(
                "Limit for category `{category}` exceeded: limit {limit:.2}, spent {spend:.2}, overage {:.2}",
                spend - limit
            ),
            entry_id: None,
            category: Some(category.to_string()),
            period: Some(period),
        }
    }

    pub fn deficit(month: u32, year: i32, balance: f64) -> Self {
        Self {
            kind: AlertKind::Deficit,
            severity: AlertKind::Deficit.severity(),
            message: format!(
                "Budget deficit in {month:02}/{year}: {:.2}",
                balance.abs()
            ),
            entry_id: None,
            category: None,
            period: Some((month, year)),
        }
    }

    pub fn display_label(&self) -> String {
        format!("[{}] {}: {}", self.severity, self.kind, self.message)
    }
}

/// Enumerates alert rules.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AlertKind {
    HighValue,
    LimitExceeded,
    Deficit,
}

impl AlertKind {
    /// Severity assigned to each rule.
    pub fn severity(self) -> Severity {
        match self {
            AlertKind::HighValue => Severity::Info,
            AlertKind::LimitExceeded => Severity::Warning,
            AlertKind::Deficit => Severity::Critical,
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AlertKind::HighValue => "High Value",
            AlertKind::LimitExceeded => "Limit Exceeded",
            AlertKind::Deficit => "Deficit",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Critical => "Critical",
        };
        f.write_str(label)
    }
}
