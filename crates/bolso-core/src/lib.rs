//! bolso-core
//!
//! Business logic and services for Bolso.
//! Depends on bolso-domain. No CLI, no terminal I/O, no direct storage
//! interactions beyond the [`storage::LedgerStore`] abstraction.

pub mod alert_engine;
pub mod budget_service;
pub mod category_service;
pub mod entry_service;
pub mod error;
pub mod report_service;
pub mod storage;

pub use alert_engine::{AlertEngine, HIGH_VALUE_THRESHOLD};
pub use budget_service::BudgetService;
pub use category_service::{default_categories, CategoryService};
pub use entry_service::{EntryFilter, EntryService};
pub use error::CoreError;
pub use report_service::{MonthlyReport, ReportService, Statistics};
pub use storage::{ledger_warnings, LedgerStore};
