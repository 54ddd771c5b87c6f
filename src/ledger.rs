//! The ledger: owner of the journal and the category catalog
//!
//! All mutation, query, and persistence goes through the [`Ledger`];
//! collaborators never touch the journal file themselves. Everything runs
//! synchronously on the caller's thread, and the design assumes a single
//! owner at a time: two ledgers pointed at the same file race on the
//! snapshot save and can lose data.

use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::models::{Category, Kind, Transaction};
use crate::storage::{load_journal, save_journal, LoadOutcome};

/// The fixed default catalog every ledger starts from
///
/// Seeded fresh on every construction and never read back from storage.
/// Categories added during a session are gone on the next run unless the
/// caller re-adds them.
pub fn default_catalog() -> Vec<Category> {
    vec![
        Category::new("Salary", Kind::Income),
        Category::new("Investments", Kind::Income),
        Category::new("Groceries", Kind::Expense),
        Category::new("Transport", Kind::Expense),
        Category::new("Entertainment", Kind::Expense),
        Category::new("Housing", Kind::Expense),
        Category::new("Health", Kind::Expense),
        Category::new("Education", Kind::Expense),
    ]
}

/// Manages the transaction journal and the category catalog
pub struct Ledger {
    journal: Vec<Transaction>,
    catalog: Vec<Category>,
    journal_path: PathBuf,
}

impl Ledger {
    /// Open a ledger backed by the journal file at `path`
    ///
    /// Seeds the default catalog, then loads whatever the file holds.
    /// Never fails: a missing file is a normal first run and a corrupt one
    /// resets the journal to empty; both conditions are reported on the
    /// log, not returned.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let journal_path = path.into();
        let catalog = default_catalog();

        let journal = match load_journal(&journal_path, &catalog) {
            LoadOutcome::NotFound => {
                info!(
                    "journal {} not found, starting empty",
                    journal_path.display()
                );
                Vec::new()
            }
            LoadOutcome::Failed(err) => {
                error!("failed to load journal {}: {}", journal_path.display(), err);
                Vec::new()
            }
            LoadOutcome::Loaded(journal) => {
                info!(
                    "loaded {} transactions from {}",
                    journal.len(),
                    journal_path.display()
                );
                journal
            }
        };

        Self {
            journal,
            catalog,
            journal_path,
        }
    }

    /// Append a transaction and snapshot the journal to disk
    ///
    /// There is no check that the category is in the catalog; a transaction
    /// built against a stale category is accepted as is.
    pub fn add(&mut self, transaction: Transaction) {
        self.journal.push(transaction);
        self.persist();
    }

    /// Remove the journal entry at the zero-based `index` and snapshot
    ///
    /// Returns `false` without touching the journal or the file when the
    /// index is out of range.
    pub fn delete(&mut self, index: usize) -> bool {
        if index >= self.journal.len() {
            return false;
        }
        self.journal.remove(index);
        self.persist();
        true
    }

    // Save failures are reported here and nowhere else; the in-memory
    // journal keeps the mutation either way, so memory and disk can
    // diverge until the next successful save.
    fn persist(&self) {
        match save_journal(&self.journal_path, &self.journal) {
            Ok(()) => info!(
                "saved {} transactions to {}",
                self.journal.len(),
                self.journal_path.display()
            ),
            Err(err) => error!(
                "failed to save journal {}: {}",
                self.journal_path.display(),
                err
            ),
        }
    }

    /// Income total minus expense total
    pub fn balance(&self) -> f64 {
        self.income_total() - self.expense_total()
    }

    /// Sum of amounts filed under income categories
    pub fn income_total(&self) -> f64 {
        self.kind_total(Kind::Income)
    }

    /// Sum of amounts filed under expense categories
    pub fn expense_total(&self) -> f64 {
        self.kind_total(Kind::Expense)
    }

    fn kind_total(&self, kind: Kind) -> f64 {
        self.journal
            .iter()
            .filter(|t| t.category.kind() == kind)
            .map(|t| t.amount)
            .sum()
    }

    /// Signed running totals per category name
    ///
    /// Built by scanning the journal in insertion order: income adds,
    /// expense subtracts. Entries appear in the order their names were
    /// first encountered, not catalog or alphabetical order.
    pub fn category_summary(&self) -> Vec<(String, f64)> {
        let mut summary: Vec<(String, f64)> = Vec::new();
        for transaction in &self.journal {
            let signed = match transaction.category.kind() {
                Kind::Income => transaction.amount,
                Kind::Expense => -transaction.amount,
            };
            match summary
                .iter_mut()
                .find(|(name, _)| name.as_str() == transaction.category.name())
            {
                Some((_, total)) => *total += signed,
                None => summary.push((transaction.category.name().to_string(), signed)),
            }
        }
        summary
    }

    /// Every transaction filed under exactly `name`, in journal order
    pub fn transactions_by_category(&self, name: &str) -> Vec<&Transaction> {
        self.journal
            .iter()
            .filter(|t| t.category.name() == name)
            .collect()
    }

    /// Append a category to the catalog and hand back a copy
    ///
    /// Duplicate names are not rejected; lookups keep answering with the
    /// first entry that matches.
    pub fn add_category(&mut self, name: impl Into<String>, kind: Kind) -> Category {
        let category = Category::new(name, kind);
        self.catalog.push(category.clone());
        category
    }

    /// Catalog entries of the given kind, in catalog order
    pub fn categories_by_kind(&self, kind: Kind) -> Vec<&Category> {
        self.catalog.iter().filter(|c| c.kind() == kind).collect()
    }

    /// First catalog entry with exactly this name
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.catalog.iter().find(|c| c.name() == name)
    }

    /// The full catalog, in catalog order
    pub fn categories(&self) -> &[Category] {
        &self.catalog
    }

    /// The journal, in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.journal
    }

    /// Path of the backing journal file
    pub fn journal_path(&self) -> &Path {
        &self.journal_path
    }

    /// Number of journal entries
    pub fn len(&self) -> usize {
        self.journal.len()
    }

    /// Whether the journal holds no entries
    pub fn is_empty(&self) -> bool {
        self.journal.is_empty()
    }
}
