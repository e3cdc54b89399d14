use thiserror::Error;
use uuid::Uuid;

use bolso_domain::CategoryKind;

/// Unified error type for validation and storage failures.
///
/// Every variant is a local, fail-fast rejection surfaced at the violating
/// operation; the core never retries or silently corrects.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Amount must be a positive number")]
    InvalidAmount,
    #[error("Category name must not be empty")]
    InvalidName,
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Description must not be empty")]
    InvalidDescription,
    #[error("Invalid payment method: {0}")]
    InvalidPaymentMethod(String),
    #[error("Category `{name}` is {actual}, expected {expected}")]
    CategoryMismatch {
        name: String,
        expected: CategoryKind,
        actual: CategoryKind,
    },
    #[error("Category `{0}` already exists")]
    DuplicateCategory(String),
    #[error("Monthly limit must be a positive amount on an expense category")]
    InvalidLimit,
    #[error("Category `{name}` has {entries} linked entries")]
    CategoryInUse { name: String, entries: usize },
    #[error("Category not found: {0}")]
    CategoryNotFound(String),
    #[error("Entry not found: {0}")]
    EntryNotFound(Uuid),
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        CoreError::Storage(err.to_string())
    }
}
