//! bolso-domain
//!
//! Pure domain models (Ledger, Category, Entry, MonthlyBudget, Alert).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod alert;
pub mod budget;
pub mod category;
pub mod entry;
pub mod ledger;

pub use alert::*;
pub use budget::*;
pub use category::*;
pub use entry::*;
pub use ledger::*;
