use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use tally::config::TallyPaths;
use tally::display;
use tally::models::{Kind, Transaction};
use tally::Ledger;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Command-line personal finance ledger",
    long_about = "tally records income and expense transactions against a \
                  category catalog and keeps running totals. The journal \
                  lives in a plain CSV file that is rewritten after every \
                  change, so it stays readable by hand and by spreadsheet."
)]
struct Cli {
    /// Journal file to operate on (defaults to the data directory)
    #[arg(long, global = true, env = "TALLY_JOURNAL")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a transaction
    Add {
        /// Amount of the transaction
        #[arg(allow_negative_numbers = true)]
        amount: f64,

        /// Category name (see `tally categories`)
        #[arg(short, long)]
        category: String,

        /// Transaction date (free-form text; defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Free-text description
        #[arg(long, default_value = "")]
        description: String,
    },

    /// List the journal with entry indices
    List,

    /// Delete the journal entry at the given zero-based index
    Delete { index: usize },

    /// Show the balance and the income/expense totals
    Balance,

    /// Show signed totals per category, in first-seen order
    Summary,

    /// List catalog categories
    Categories {
        /// Restrict to one kind (income or expense)
        #[arg(short, long)]
        kind: Option<Kind>,
    },

    /// Add a category to this session's catalog
    AddCategory {
        /// Category name
        name: String,

        /// income or expense
        #[arg(short, long)]
        kind: Kind,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let journal_file = match cli.file {
        Some(path) => path,
        None => {
            let paths = TallyPaths::new()?;
            paths.ensure_directories()?;
            paths.journal_file()
        }
    };

    let mut ledger = Ledger::open(&journal_file);

    match cli.command {
        Commands::Add {
            amount,
            category,
            date,
            description,
        } => {
            let Some(category) = ledger.category(&category).cloned() else {
                let known: Vec<&str> = ledger.categories().iter().map(|c| c.name()).collect();
                bail!(
                    "unknown category '{}'; known categories: {}",
                    category,
                    known.join(", ")
                );
            };
            let date =
                date.unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());

            ledger.add(Transaction::with_description(
                amount,
                category,
                date,
                description,
            ));
            println!(
                "Recorded. {} entries on file, balance {:.2}.",
                ledger.len(),
                ledger.balance()
            );
        }
        Commands::List => {
            print!("{}", display::format_journal(ledger.transactions()));
        }
        Commands::Delete { index } => {
            if ledger.delete(index) {
                println!("Deleted entry {}.", index);
            } else {
                bail!(
                    "no journal entry at index {} ({} on file)",
                    index,
                    ledger.len()
                );
            }
        }
        Commands::Balance => {
            println!("Balance:  {:>14.2}", ledger.balance());
            println!("Income:   {:>14.2}", ledger.income_total());
            println!("Expenses: {:>14.2}", ledger.expense_total());
        }
        Commands::Summary => {
            print!("{}", display::format_summary(&ledger.category_summary()));
        }
        Commands::Categories { kind } => {
            let categories = match kind {
                Some(kind) => ledger.categories_by_kind(kind),
                None => ledger.categories().iter().collect(),
            };
            print!("{}", display::format_catalog(&categories));
        }
        Commands::AddCategory { name, kind } => {
            let category = ledger.add_category(name, kind);
            println!("Added category {}.", category);
            println!("Note: the catalog lives in memory only and reseeds on the next run.");
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::from_default_env().add_directive("tally=info".parse().unwrap());

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
