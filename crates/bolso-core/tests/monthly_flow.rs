use bolso_core::{
    AlertEngine, BudgetService, CategoryService, CoreError, EntryService,
};
use bolso_domain::{AlertKind, CategoryKind, EntryKind, Ledger, PaymentMethod};
use chrono::NaiveDate;

fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn december_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    CategoryService::add(&mut ledger, "Salário", CategoryKind::Income, None).unwrap();
    CategoryService::add(
        &mut ledger,
        "Alimentação",
        CategoryKind::Expense,
        Some(800.0),
    )
    .unwrap();
    ledger
}

#[test]
fn spend_within_limit_raises_no_limit_alert() {
    let mut ledger = december_ledger();
    EntryService::add(
        &mut ledger,
        EntryKind::Income,
        5000.0,
        sample_date(2024, 12, 1),
        "Salário",
        "salário de dezembro",
        PaymentMethod::Pix,
    )
    .unwrap();
    EntryService::add(
        &mut ledger,
        EntryKind::Expense,
        600.0,
        sample_date(2024, 12, 10),
        "Alimentação",
        "mercado",
        PaymentMethod::Debit,
    )
    .unwrap();

    let budget = BudgetService::compute(&ledger, 12, 2024).unwrap();
    assert_eq!(budget.category_spend("Alimentação"), 600.0);

    let alerts = AlertEngine::evaluate(&ledger, 12, 2024).unwrap();
    // 600 is above the high-value threshold but within the category limit.
    assert!(alerts
        .iter()
        .all(|alert| alert.kind != AlertKind::LimitExceeded));
}

#[test]
fn second_expense_pushes_category_over_its_limit() {
    let mut ledger = december_ledger();
    EntryService::add(
        &mut ledger,
        EntryKind::Income,
        5000.0,
        sample_date(2024, 12, 1),
        "Salário",
        "salário de dezembro",
        PaymentMethod::Pix,
    )
    .unwrap();
    EntryService::add(
        &mut ledger,
        EntryKind::Expense,
        600.0,
        sample_date(2024, 12, 10),
        "Alimentação",
        "mercado",
        PaymentMethod::Debit,
    )
    .unwrap();
    EntryService::add(
        &mut ledger,
        EntryKind::Expense,
        300.0,
        sample_date(2024, 12, 15),
        "Alimentação",
        "feira",
        PaymentMethod::Cash,
    )
    .unwrap();

    let budget = BudgetService::compute(&ledger, 12, 2024).unwrap();
    assert_eq!(budget.category_spend("Alimentação"), 900.0);

    let alerts = AlertEngine::evaluate(&ledger, 12, 2024).unwrap();
    let exceeded: Vec<_> = alerts
        .iter()
        .filter(|alert| alert.kind == AlertKind::LimitExceeded)
        .collect();
    assert_eq!(exceeded.len(), 1);
    assert_eq!(exceeded[0].category.as_deref(), Some("Alimentação"));
    assert!(exceeded[0].message.contains("overage 100.00"));
}

#[test]
fn removing_the_income_flips_the_month_into_deficit() {
    let mut ledger = december_ledger();
    let income_id = EntryService::add(
        &mut ledger,
        EntryKind::Income,
        5000.0,
        sample_date(2024, 12, 1),
        "Salário",
        "salário de dezembro",
        PaymentMethod::Pix,
    )
    .unwrap();
    EntryService::add(
        &mut ledger,
        EntryKind::Expense,
        600.0,
        sample_date(2024, 12, 10),
        "Alimentação",
        "mercado",
        PaymentMethod::Debit,
    )
    .unwrap();

    let budget = BudgetService::compute(&ledger, 12, 2024).unwrap();
    assert_eq!(budget.balance, 4400.0);
    let alerts = AlertEngine::evaluate(&ledger, 12, 2024).unwrap();
    assert!(alerts.iter().all(|alert| alert.kind != AlertKind::Deficit));

    EntryService::remove(&mut ledger, income_id).unwrap();

    let budget = BudgetService::compute(&ledger, 12, 2024).unwrap();
    assert_eq!(budget.balance, -600.0);
    let deficits: Vec<_> = AlertEngine::evaluate(&ledger, 12, 2024)
        .unwrap()
        .into_iter()
        .filter(|alert| alert.kind == AlertKind::Deficit)
        .collect();
    assert_eq!(deficits.len(), 1);
    assert!(deficits[0].message.contains("600.00"));
}

#[test]
fn category_deletion_respects_referential_integrity() {
    let mut ledger = december_ledger();
    let entry_id = EntryService::add(
        &mut ledger,
        EntryKind::Expense,
        50.0,
        sample_date(2024, 12, 3),
        "Alimentação",
        "padaria",
        PaymentMethod::Cash,
    )
    .unwrap();

    let err = CategoryService::remove(&mut ledger, "Alimentação").expect_err("still referenced");
    assert!(matches!(
        err,
        CoreError::CategoryInUse { ref name, entries: 1 } if name == "Alimentação"
    ));
    assert!(ledger.category("Alimentação").is_some(), "no partial state");

    EntryService::remove(&mut ledger, entry_id).unwrap();
    CategoryService::remove(&mut ledger, "Alimentação").expect("unreferenced now");
    assert!(ledger.category("Alimentação").is_none());
}

#[test]
fn limit_of_a_referenced_category_can_be_edited_in_place() {
    let mut ledger = december_ledger();
    EntryService::add(
        &mut ledger,
        EntryKind::Expense,
        450.0,
        sample_date(2024, 12, 10),
        "Alimentação",
        "mercado",
        PaymentMethod::Debit,
    )
    .unwrap();

    // Removal is blocked while entries reference the category, but the
    // limit itself stays editable.
    let err = CategoryService::remove(&mut ledger, "Alimentação").expect_err("still referenced");
    assert!(matches!(err, CoreError::CategoryInUse { .. }));

    let alerts = AlertEngine::evaluate(&ledger, 12, 2024).unwrap();
    assert!(alerts
        .iter()
        .all(|alert| alert.kind != AlertKind::LimitExceeded));

    CategoryService::set_limit(&mut ledger, "Alimentação", Some(400.0)).unwrap();
    let exceeded: Vec<_> = AlertEngine::evaluate(&ledger, 12, 2024)
        .unwrap()
        .into_iter()
        .filter(|alert| alert.kind == AlertKind::LimitExceeded)
        .collect();
    assert_eq!(exceeded.len(), 1);
    assert!(exceeded[0].message.contains("overage 50.00"));
}

#[test]
fn every_expense_references_an_expense_category() {
    let mut ledger = december_ledger();
    EntryService::add(
        &mut ledger,
        EntryKind::Income,
        1000.0,
        sample_date(2024, 12, 1),
        "Salário",
        "salário",
        PaymentMethod::Transfer,
    )
    .unwrap();
    EntryService::add(
        &mut ledger,
        EntryKind::Expense,
        100.0,
        sample_date(2024, 12, 2),
        "Alimentação",
        "mercado",
        PaymentMethod::Debit,
    )
    .unwrap();

    for entry in &ledger.entries {
        let category = ledger.category(&entry.category).expect("category exists");
        assert_eq!(category.kind, entry.kind.category_kind());
    }
}
