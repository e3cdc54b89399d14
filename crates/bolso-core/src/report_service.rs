//! Aggregation facade for monthly reports and overall statistics.

use std::collections::BTreeMap;

use chrono::Datelike;

use bolso_domain::{Alert, EntryKind, Ledger, MonthlyBudget, PaymentMethod};

use crate::{alert_engine::AlertEngine, budget_service::BudgetService, error::CoreError};

/// Everything the report command prints for one month.
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    pub budget: MonthlyBudget,
    pub alerts: Vec<Alert>,
    /// Each category's share of the month's total expense, in percent.
    pub category_share: BTreeMap<String, f64>,
    pub spend_per_payment_method: BTreeMap<PaymentMethod, f64>,
    pub entry_count: usize,
}

/// Lifetime counters across every recorded period.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub categories: usize,
    pub entries: usize,
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
}

/// Aggregates ledger data for reporting scenarios.
///
/// See also: [`BudgetService`] and [`AlertEngine`] for the underlying
/// derivations.
pub struct ReportService;

impl ReportService {
    /// Builds the full report for one month: budget, alerts and expense
    /// breakdowns.
    pub fn monthly(ledger: &Ledger, month: u32, year: i32) -> Result<MonthlyReport, CoreError> {
        let budget = BudgetService::compute(ledger, month, year)?;
        let alerts = AlertEngine::evaluate(ledger, month, year)?;

        let mut category_share = BTreeMap::new();
        if budget.total_expense > 0.0 {
            for (name, spend) in &budget.spend_per_category {
                category_share.insert(name.clone(), (spend / budget.total_expense) * 100.0);
            }
        }

        let mut spend_per_payment_method = BTreeMap::new();
        let mut entry_count = 0;
        for entry in &ledger.entries {
            if entry.period() != (month, year) {
                continue;
            }
            entry_count += 1;
            if entry.kind == EntryKind::Expense {
                *spend_per_payment_method
                    .entry(entry.payment_method)
                    .or_insert(0.0) += entry.amount;
            }
        }

        Ok(MonthlyReport {
            budget,
            alerts,
            category_share,
            spend_per_payment_method,
            entry_count,
        })
    }

    /// Reports for the most recent `months` periods with recorded activity,
    /// newest first.
    pub fn comparative(ledger: &Ledger, months: usize) -> Result<Vec<MonthlyReport>, CoreError> {
        let mut periods: Vec<(i32, u32)> = ledger
            .entries
            .iter()
            .map(|entry| (entry.date.year(), entry.date.month()))
            .collect();
        periods.sort_unstable();
        periods.dedup();
        periods
            .into_iter()
            .rev()
            .take(months)
            .map(|(year, month)| Self::monthly(ledger, month, year))
            .collect()
    }

    /// Overall counters across the whole ledger.
    pub fn statistics(ledger: &Ledger) -> Statistics {
        let mut total_income = 0.0;
        let mut total_expense = 0.0;
        for entry in &ledger.entries {
            match entry.kind {
                EntryKind::Income => total_income += entry.amount,
                EntryKind::Expense => total_expense += entry.amount,
            }
        }
        Statistics {
            categories: ledger.categories.len(),
            entries: ledger.entries.len(),
            total_income,
            total_expense,
            balance: total_income - total_expense,
        }
    }

    /// The `(month, year, total_expense)` of the cheapest month with
    /// activity, ties broken by the earlier month.
    pub fn leanest_month(ledger: &Ledger) -> Option<(u32, i32, f64)> {
        let mut expense_by_period: BTreeMap<(i32, u32), f64> = BTreeMap::new();
        for entry in &ledger.entries {
            let key = (entry.date.year(), entry.date.month());
            let slot = expense_by_period.entry(key).or_insert(0.0);
            if entry.kind == EntryKind::Expense {
                *slot += entry.amount;
            }
        }
        expense_by_period
            .into_iter()
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|((year, month), expense)| (month, year, expense))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CategoryService, EntryService};
    use bolso_domain::CategoryKind;
    use chrono::NaiveDate;

    fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn seeded_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        CategoryService::add(&mut ledger, "Salário", CategoryKind::Income, None).unwrap();
        CategoryService::add(&mut ledger, "Alimentação", CategoryKind::Expense, None).unwrap();
        CategoryService::add(&mut ledger, "Lazer", CategoryKind::Expense, None).unwrap();
        EntryService::add(
            &mut ledger,
            EntryKind::Income,
            4000.0,
            sample_date(2024, 12, 1),
            "Salário",
            "salário",
            PaymentMethod::Pix,
        )
        .unwrap();
        EntryService::add(
            &mut ledger,
            EntryKind::Expense,
            300.0,
            sample_date(2024, 12, 10),
            "Alimentação",
            "mercado",
            PaymentMethod::Debit,
        )
        .unwrap();
        EntryService::add(
            &mut ledger,
            EntryKind::Expense,
            100.0,
            sample_date(2024, 12, 12),
            "Lazer",
            "cinema",
            PaymentMethod::Credit,
        )
        .unwrap();
        ledger
    }

    #[test]
    fn monthly_report_breaks_down_expenses() {
        let ledger = seeded_ledger();
        let report = ReportService::monthly(&ledger, 12, 2024).unwrap();

        assert_eq!(report.entry_count, 3);
        assert_eq!(report.category_share.get("Alimentação"), Some(&75.0));
        assert_eq!(report.category_share.get("Lazer"), Some(&25.0));
        assert_eq!(
            report.spend_per_payment_method.get(&PaymentMethod::Debit),
            Some(&300.0)
        );
        assert_eq!(
            report.spend_per_payment_method.get(&PaymentMethod::Credit),
            Some(&100.0)
        );
        assert!(report.alerts.is_empty());
    }

    #[test]
    fn statistics_cover_all_periods() {
        let mut ledger = seeded_ledger();
        EntryService::add(
            &mut ledger,
            EntryKind::Expense,
            50.0,
            sample_date(2025, 1, 2),
            "Lazer",
            "janeiro",
            PaymentMethod::Cash,
        )
        .unwrap();

        let stats = ReportService::statistics(&ledger);
        assert_eq!(stats.categories, 3);
        assert_eq!(stats.entries, 4);
        assert_eq!(stats.total_income, 4000.0);
        assert_eq!(stats.total_expense, 450.0);
        assert_eq!(stats.balance, 3550.0);
    }

    #[test]
    fn comparative_returns_recent_months_newest_first() {
        let mut ledger = seeded_ledger();
        EntryService::add(
            &mut ledger,
            EntryKind::Expense,
            200.0,
            sample_date(2024, 11, 15),
            "Lazer",
            "novembro",
            PaymentMethod::Cash,
        )
        .unwrap();
        EntryService::add(
            &mut ledger,
            EntryKind::Expense,
            50.0,
            sample_date(2025, 1, 2),
            "Lazer",
            "janeiro",
            PaymentMethod::Cash,
        )
        .unwrap();

        let reports = ReportService::comparative(&ledger, 2).unwrap();
        let periods: Vec<(u32, i32)> = reports
            .iter()
            .map(|report| (report.budget.month, report.budget.year))
            .collect();
        assert_eq!(periods, [(1, 2025), (12, 2024)]);
        assert_eq!(reports[1].budget.total_income, 4000.0);

        let all = ReportService::comparative(&ledger, 10).unwrap();
        assert_eq!(all.len(), 3);
        assert!(ReportService::comparative(&Ledger::new(), 3)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn leanest_month_picks_lowest_expense() {
        let mut ledger = seeded_ledger();
        EntryService::add(
            &mut ledger,
            EntryKind::Expense,
            50.0,
            sample_date(2025, 1, 2),
            "Lazer",
            "janeiro",
            PaymentMethod::Cash,
        )
        .unwrap();

        assert_eq!(ReportService::leanest_month(&ledger), Some((1, 2025, 50.0)));
        assert_eq!(ReportService::leanest_month(&Ledger::new()), None);
    }
}
