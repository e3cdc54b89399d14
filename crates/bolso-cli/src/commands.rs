//! Maps parsed arguments onto core service calls and formats the output.

use std::path::PathBuf;

use tracing::warn;

use bolso_core::{
    default_categories, AlertEngine, CategoryService, CoreError, EntryFilter, EntryService,
    LedgerStore, ReportService,
};
use bolso_domain::{CategoryKind, EntryKind, Ledger, PaymentMethod};
use bolso_storage_json::JsonStore;

use crate::{CategoryCommand, Cli, Command, CompareArgs, EntryArgs, EntryListArgs, PeriodArgs};

pub fn parse_kind(value: &str) -> Result<CategoryKind, String> {
    match value.trim().to_lowercase().as_str() {
        "income" => Ok(CategoryKind::Income),
        "expense" => Ok(CategoryKind::Expense),
        other => Err(format!("expected `income` or `expense`, got `{other}`")),
    }
}

pub fn parse_entry_kind(value: &str) -> Result<EntryKind, String> {
    parse_kind(value).map(|kind| match kind {
        CategoryKind::Income => EntryKind::Income,
        CategoryKind::Expense => EntryKind::Expense,
    })
}

pub fn parse_payment_method(value: &str) -> Result<PaymentMethod, CoreError> {
    value.parse().map_err(CoreError::InvalidPaymentMethod)
}

fn default_data_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bolso")
        .join("ledger.json")
}

fn open_store(cli: &Cli) -> JsonStore {
    JsonStore::new(cli.data_file.clone().unwrap_or_else(default_data_file))
}

fn load_initialized(store: &JsonStore) -> Result<Ledger, CoreError> {
    if !store.exists() {
        return Err(CoreError::Storage(format!(
            "store not initialized at {} (run `bolso init` first)",
            store.path().display()
        )));
    }
    store.load()
}

pub fn run(cli: Cli) -> Result<(), CoreError> {
    let store = open_store(&cli);

    match &cli.command {
        Command::Init => init(&store),
        Command::Category { command } => category(&store, command),
        Command::Income(args) => add_entry(&store, EntryKind::Income, args),
        Command::Expense(args) => add_entry(&store, EntryKind::Expense, args),
        Command::Entries(args) => list_entries(&store, args),
        Command::RemoveEntry { id } => {
            let mut ledger = load_initialized(&store)?;
            let removed = EntryService::remove(&mut ledger, *id)?;
            store.save(&ledger)?;
            println!("Removed {}", removed.display_label());
            Ok(())
        }
        Command::Report(args) => report(&store, args),
        Command::Compare(args) => compare(&store, args),
        Command::Alerts(args) => alerts(&store, args),
        Command::Stats => stats(&store),
    }
}

fn init(store: &JsonStore) -> Result<(), CoreError> {
    let mut ledger = store.initialize()?;
    if ledger.categories.is_empty() {
        for category in default_categories() {
            CategoryService::add(
                &mut ledger,
                &category.name,
                category.kind,
                category.monthly_limit,
            )?;
        }
        store.save(&ledger)?;
        println!(
            "Initialized store at {} with {} default categories",
            store.path().display(),
            ledger.categories.len()
        );
    } else {
        println!("Store already initialized at {}", store.path().display());
    }
    Ok(())
}

fn category(store: &JsonStore, command: &CategoryCommand) -> Result<(), CoreError> {
    match command {
        CategoryCommand::Add { name, kind, limit } => {
            let mut ledger = load_initialized(store)?;
            CategoryService::add(&mut ledger, name, *kind, *limit)?;
            store.save(&ledger)?;
            println!("Added category `{}`", name.trim());
        }
        CategoryCommand::List { kind } => {
            let ledger = load_initialized(store)?;
            let categories = CategoryService::list(&ledger, *kind);
            if categories.is_empty() {
                println!("No categories.");
            }
            for category in categories {
                println!("{}", category.display_label());
            }
        }
        CategoryCommand::SetLimit { name, limit } => {
            let mut ledger = load_initialized(store)?;
            CategoryService::set_limit(&mut ledger, name, *limit)?;
            store.save(&ledger)?;
            match limit {
                Some(limit) => println!("Set limit of `{}` to {limit:.2}", name.trim()),
                None => println!("Cleared limit of `{}`", name.trim()),
            }
        }
        CategoryCommand::Remove { name } => {
            let mut ledger = load_initialized(store)?;
            let removed = CategoryService::remove(&mut ledger, name)?;
            store.save(&ledger)?;
            println!("Removed category `{}`", removed.name);
        }
    }
    Ok(())
}

fn add_entry(store: &JsonStore, kind: EntryKind, args: &EntryArgs) -> Result<(), CoreError> {
    let mut ledger = load_initialized(store)?;
    let method = args.method.unwrap_or(match kind {
        EntryKind::Income => PaymentMethod::Pix,
        EntryKind::Expense => PaymentMethod::Debit,
    });
    let id = EntryService::add(
        &mut ledger,
        kind,
        args.amount,
        args.date,
        &args.category,
        &args.description,
        method,
    )?;
    store.save(&ledger)?;
    println!("Recorded {kind} {id}");

    // Surface any alerts the new entry introduced in its month.
    use chrono::Datelike;
    let (month, year) = (args.date.month(), args.date.year());
    match AlertEngine::evaluate(&ledger, month, year) {
        Ok(alerts) => {
            for alert in alerts
                .iter()
                .filter(|alert| alert.entry_id == Some(id) || alert.entry_id.is_none())
            {
                println!("  {}", alert.display_label());
            }
        }
        Err(err) => warn!(%err, "alert evaluation failed"),
    }
    Ok(())
}

fn list_entries(store: &JsonStore, args: &EntryListArgs) -> Result<(), CoreError> {
    let ledger = load_initialized(store)?;
    let filter = EntryFilter {
        month: args.month,
        year: args.year,
        kind: args.kind,
        category: args.category.clone(),
    };
    let entries = EntryService::list(&ledger, &filter);
    if entries.is_empty() {
        println!("No entries.");
    }
    for entry in entries {
        println!("{}  {}", entry.id, entry.display_label());
    }
    Ok(())
}

fn report(store: &JsonStore, args: &PeriodArgs) -> Result<(), CoreError> {
    let ledger = load_initialized(store)?;
    let report = ReportService::monthly(&ledger, args.month, args.year)?;
    let budget = &report.budget;

    println!("Monthly report {:02}/{}", budget.month, budget.year);
    println!("  Income:  {:>12.2}", budget.total_income);
    println!("  Expense: {:>12.2}", budget.total_expense);
    println!("  Balance: {:>12.2}", budget.balance);
    println!("  Entries: {}", report.entry_count);

    if !budget.spend_per_category.is_empty() {
        println!("Spend per category:");
        for (name, spend) in &budget.spend_per_category {
            let share = report.category_share.get(name).copied().unwrap_or(0.0);
            println!("  {name:<20} {spend:>10.2} ({share:>5.1}%)");
        }
    }
    if !report.spend_per_payment_method.is_empty() {
        println!("Spend per payment method:");
        for (method, spend) in &report.spend_per_payment_method {
            println!("  {method:<20} {spend:>10.2}");
        }
    }
    if report.alerts.is_empty() {
        println!("No alerts.");
    } else {
        println!("Alerts:");
        for alert in &report.alerts {
            println!("  {}", alert.display_label());
        }
    }
    Ok(())
}

fn compare(store: &JsonStore, args: &CompareArgs) -> Result<(), CoreError> {
    let ledger = load_initialized(store)?;
    let reports = ReportService::comparative(&ledger, args.months)?;
    if reports.is_empty() {
        println!("No months to compare.");
        return Ok(());
    }
    println!(
        "{:<8} {:>12} {:>12} {:>12}  Status",
        "Month", "Income", "Expense", "Balance"
    );
    for report in &reports {
        let budget = &report.budget;
        let status = if budget.has_deficit() {
            "deficit"
        } else {
            "positive"
        };
        println!(
            "{:02}/{:<5} {:>12.2} {:>12.2} {:>12.2}  {status}",
            budget.month, budget.year, budget.total_income, budget.total_expense, budget.balance
        );
    }
    Ok(())
}

fn alerts(store: &JsonStore, args: &PeriodArgs) -> Result<(), CoreError> {
    let ledger = load_initialized(store)?;
    let alerts = AlertEngine::evaluate(&ledger, args.month, args.year)?;
    if alerts.is_empty() {
        println!("No alerts for {:02}/{}.", args.month, args.year);
    }
    for alert in alerts {
        println!("{}", alert.display_label());
    }
    Ok(())
}

fn stats(store: &JsonStore) -> Result<(), CoreError> {
    let ledger = load_initialized(store)?;
    let stats = ReportService::statistics(&ledger);
    println!("Categories: {}", stats.categories);
    println!("Entries:    {}", stats.entries);
    println!("Income:     {:>12.2}", stats.total_income);
    println!("Expense:    {:>12.2}", stats.total_expense);
    println!("Balance:    {:>12.2}", stats.balance);
    if let Some((month, year, expense)) = ReportService::leanest_month(&ledger) {
        println!("Leanest month: {month:02}/{year} (expense {expense:.2})");
    }
    Ok(())
}
