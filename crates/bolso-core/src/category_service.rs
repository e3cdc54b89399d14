//! Business logic helpers for category management.

use tracing::info;

use bolso_domain::{normalize_name, Category, CategoryKind, Ledger};

use crate::error::CoreError;

/// Provides validated operations for [`Category`] entities.
///
/// See also: [`crate::entry_service::EntryService`] for the kind-matching
/// rules applied when entries reference categories.
pub struct CategoryService;

impl CategoryService {
    /// Adds a new category after checking name uniqueness and limit rules.
    pub fn add(
        ledger: &mut Ledger,
        name: &str,
        kind: CategoryKind,
        monthly_limit: Option<f64>,
    ) -> Result<(), CoreError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CoreError::InvalidName);
        }
        if ledger.category(trimmed).is_some() {
            return Err(CoreError::DuplicateCategory(trimmed.to_string()));
        }
        if let Some(limit) = monthly_limit {
            // Limits only make sense for expense categories.
            if kind != CategoryKind::Expense || !limit.is_finite() || limit <= 0.0 {
                return Err(CoreError::InvalidLimit);
            }
        }

        let mut category = Category::new(trimmed, kind);
        category.monthly_limit = monthly_limit;
        info!(name = %category.name, kind = %category.kind, "category added");
        ledger.categories.push(category);
        ledger.touch();
        Ok(())
    }

    /// Replaces a category's monthly limit; `None` clears it. The same
    /// limit rules as [`CategoryService::add`] apply.
    pub fn set_limit(
        ledger: &mut Ledger,
        name: &str,
        monthly_limit: Option<f64>,
    ) -> Result<(), CoreError> {
        let needle = normalize_name(name);
        let position = ledger
            .categories
            .iter()
            .position(|category| category.normalized_name() == needle)
            .ok_or_else(|| CoreError::CategoryNotFound(name.trim().to_string()))?;
        if let Some(limit) = monthly_limit {
            if ledger.categories[position].kind != CategoryKind::Expense
                || !limit.is_finite()
                || limit <= 0.0
            {
                return Err(CoreError::InvalidLimit);
            }
        }
        let category = &mut ledger.categories[position];
        category.monthly_limit = monthly_limit;
        info!(name = %category.name, limit = ?monthly_limit, "category limit updated");
        ledger.touch();
        Ok(())
    }

    /// Removes a category, refusing while any entry still references it.
    pub fn remove(ledger: &mut Ledger, name: &str) -> Result<Category, CoreError> {
        let linked = ledger.entries_for_category(name).count();
        if linked > 0 {
            return Err(CoreError::CategoryInUse {
                name: name.trim().to_string(),
                entries: linked,
            });
        }
        let needle = normalize_name(name);
        let position = ledger
            .categories
            .iter()
            .position(|category| category.normalized_name() == needle)
            .ok_or_else(|| CoreError::CategoryNotFound(name.trim().to_string()))?;
        let removed = ledger.categories.remove(position);
        ledger.touch();
        info!(name = %removed.name, "category removed");
        Ok(removed)
    }

    /// Lists categories in insertion order, optionally filtered by kind.
    pub fn list(ledger: &Ledger, kind: Option<CategoryKind>) -> Vec<&Category> {
        ledger
            .categories
            .iter()
            .filter(|category| kind.map_or(true, |wanted| category.kind == wanted))
            .collect()
    }
}

/// Seed set applied when initializing an empty store.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("Salário", CategoryKind::Income),
        Category::new("Outros Rendimentos", CategoryKind::Income),
        Category::new("Alimentação", CategoryKind::Expense).with_limit(800.0),
        Category::new("Transporte", CategoryKind::Expense).with_limit(400.0),
        Category::new("Moradia", CategoryKind::Expense),
        Category::new("Lazer", CategoryKind::Expense).with_limit(300.0),
        Category::new("Saúde", CategoryKind::Expense),
    ]
}
