use bolso_core::{CategoryService, EntryService, LedgerStore};
use bolso_domain::{CategoryKind, EntryKind, Ledger, PaymentMethod};
use bolso_storage_json::JsonStore;
use chrono::NaiveDate;
use tempfile::tempdir;

fn populated_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    CategoryService::add(&mut ledger, "Salário", CategoryKind::Income, None).unwrap();
    CategoryService::add(
        &mut ledger,
        "Alimentação",
        CategoryKind::Expense,
        Some(800.0),
    )
    .unwrap();
    EntryService::add(
        &mut ledger,
        EntryKind::Income,
        5000.0,
        NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
        "Salário",
        "salário de dezembro",
        PaymentMethod::Pix,
    )
    .unwrap();
    EntryService::add(
        &mut ledger,
        EntryKind::Expense,
        600.0,
        NaiveDate::from_ymd_opt(2024, 12, 10).unwrap(),
        "Alimentação",
        "mercado",
        PaymentMethod::Debit,
    )
    .unwrap();
    ledger
}

#[test]
fn save_and_load_round_trips_the_model() {
    let dir = tempdir().expect("tempdir");
    let store = JsonStore::new(dir.path().join("ledger.json"));

    let ledger = populated_ledger();
    store.save(&ledger).expect("save ledger");
    let loaded = store.load().expect("load ledger");

    assert_eq!(loaded.categories, ledger.categories);
    assert_eq!(loaded.entries, ledger.entries);

    // Derived aggregates survive the round trip unchanged.
    let before = bolso_core::BudgetService::compute(&ledger, 12, 2024).unwrap();
    let after = bolso_core::BudgetService::compute(&loaded, 12, 2024).unwrap();
    assert_eq!(before, after);
}

#[test]
fn initialize_creates_an_empty_store_once() {
    let dir = tempdir().expect("tempdir");
    let store = JsonStore::new(dir.path().join("data").join("ledger.json"));
    assert!(!store.exists());

    let ledger = store.initialize().expect("initialize");
    assert!(ledger.is_empty());
    assert!(store.exists());

    // A second initialize loads instead of truncating.
    let populated = populated_ledger();
    store.save(&populated).expect("save");
    let reloaded = store.initialize().expect("re-initialize");
    assert_eq!(reloaded.entries.len(), 2);
}

#[test]
fn save_leaves_no_temp_file_behind() {
    let dir = tempdir().expect("tempdir");
    let store = JsonStore::new(dir.path().join("ledger.json"));
    store.save(&populated_ledger()).expect("save");

    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .expect("read dir")
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext == "tmp")
                .unwrap_or(false)
        })
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn load_rejects_malformed_documents() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("ledger.json");
    std::fs::write(&path, "{not json").expect("write");

    let store = JsonStore::new(path);
    let err = store.load().expect_err("malformed");
    assert!(err.to_string().contains("malformed ledger file"));
}
