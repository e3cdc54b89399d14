//! Command-line surface for the Bolso personal finance tracker.
//!
//! Argument parsing, formatting and exit-code mapping live here; every
//! domain decision is delegated to `bolso-core`.

mod commands;

use std::{path::PathBuf, sync::Once};

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

use bolso_domain::PaymentMethod;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
fn init_tracing() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("bolso_core=warn".parse().unwrap());
        fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
    });
}

#[derive(Parser, Debug)]
#[command(name = "bolso")]
#[command(about = "Personal income/expense tracker with monthly category limits")]
struct Cli {
    /// Path of the ledger store (also read from `BOLSO_DATA_FILE`).
    #[arg(long, env = "BOLSO_DATA_FILE", global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the store and seed default categories.
    Init,
    /// Manage categories.
    Category {
        #[command(subcommand)]
        command: CategoryCommand,
    },
    /// Record an income entry.
    Income(EntryArgs),
    /// Record an expense entry.
    Expense(EntryArgs),
    /// List entries, optionally filtered.
    Entries(EntryListArgs),
    /// Delete an entry by id.
    RemoveEntry { id: Uuid },
    /// Monthly report: totals, breakdowns and alerts.
    Report(PeriodArgs),
    /// Compare the most recent months side by side.
    Compare(CompareArgs),
    /// Alerts for a month.
    Alerts(PeriodArgs),
    /// Overall statistics.
    Stats,
}

#[derive(Subcommand, Debug)]
enum CategoryCommand {
    Add {
        name: String,
        /// income | expense
        #[arg(long, value_parser = commands::parse_kind)]
        kind: bolso_domain::CategoryKind,
        /// Monthly spending limit (expense categories only).
        #[arg(long)]
        limit: Option<f64>,
    },
    List {
        #[arg(long, value_parser = commands::parse_kind)]
        kind: Option<bolso_domain::CategoryKind>,
    },
    /// Change a category's monthly spending limit.
    SetLimit {
        name: String,
        /// New limit; omit to clear the limit.
        #[arg(long)]
        limit: Option<f64>,
    },
    Remove { name: String },
}

#[derive(Args, Debug)]
struct EntryArgs {
    #[arg(long)]
    amount: f64,
    /// Date as YYYY-MM-DD.
    #[arg(long)]
    date: NaiveDate,
    #[arg(long)]
    category: String,
    #[arg(long)]
    description: String,
    /// pix | credit | debit | cash | transfer
    #[arg(long, value_parser = commands::parse_payment_method)]
    method: Option<PaymentMethod>,
}

#[derive(Args, Debug)]
struct EntryListArgs {
    #[arg(long)]
    month: Option<u32>,
    #[arg(long)]
    year: Option<i32>,
    /// income | expense
    #[arg(long, value_parser = commands::parse_entry_kind)]
    kind: Option<bolso_domain::EntryKind>,
    #[arg(long)]
    category: Option<String>,
}

#[derive(Args, Debug)]
struct CompareArgs {
    /// Number of recent months to include.
    #[arg(long, default_value_t = 3)]
    months: usize,
}

#[derive(Args, Debug)]
struct PeriodArgs {
    #[arg(long)]
    month: u32,
    #[arg(long)]
    year: i32,
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(err) = commands::run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
