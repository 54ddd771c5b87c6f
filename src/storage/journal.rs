//! Journal persistence
//!
//! One CSV file holds the whole journal: a header row naming the five
//! fields, then one row per transaction in journal order. There is no
//! append path and no atomic-replace dance; the snapshot truncates the
//! file in place.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Transaction};

/// One row of the journal file
///
/// Fields are matched by header name on read, so column order in an
/// existing file does not matter.
#[derive(Debug, Serialize, Deserialize)]
struct JournalRecord {
    #[serde(rename = "Amount")]
    amount: f64,

    #[serde(rename = "Category")]
    category: String,

    /// The kind's display label. Written for human readers; the load path
    /// resolves the category by name and never consults this column.
    #[serde(rename = "Type")]
    kind: String,

    #[serde(rename = "Date")]
    date: String,

    #[serde(rename = "Description")]
    description: String,
}

/// Result of reading the journal file when a ledger is opened
#[derive(Debug)]
pub enum LoadOutcome {
    /// The file does not exist yet. Normal first run.
    NotFound,

    /// The file exists but could not be read or parsed. No partial journal
    /// is kept.
    Failed(LedgerError),

    /// Every row whose category name resolved against the catalog, in file
    /// order.
    Loaded(Vec<Transaction>),
}

/// Write the full journal snapshot, replacing any previous contents
///
/// The header row is written even when the journal is empty. Parent
/// directories are created as needed.
pub fn save_journal(path: &Path, journal: &[Transaction]) -> LedgerResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                LedgerError::Io(format!("failed to create {}: {}", parent.display(), e))
            })?;
        }
    }

    // The header is written by hand so that it lands even when the
    // journal is empty.
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(["Amount", "Category", "Type", "Date", "Description"])?;

    for transaction in journal {
        writer.serialize(JournalRecord {
            amount: transaction.amount,
            category: transaction.category.name().to_string(),
            kind: transaction.category.kind().label().to_string(),
            date: transaction.date.clone(),
            description: transaction.description.clone(),
        })?;
    }

    writer
        .flush()
        .map_err(|e| LedgerError::Io(e.to_string()))?;

    Ok(())
}

/// Read the journal back, resolving each row's category by name against
/// `catalog` (first match wins)
///
/// Rows naming a category absent from the catalog are dropped without any
/// report. Because the catalog itself is never persisted, renaming or
/// removing a catalog entry between runs strands the rows that referenced
/// it; round-trip users rely on the drop, so the behavior is kept as is.
pub fn load_journal(path: &Path, catalog: &[Category]) -> LoadOutcome {
    if !path.exists() {
        return LoadOutcome::NotFound;
    }

    let mut reader = match csv::Reader::from_path(path) {
        Ok(reader) => reader,
        Err(err) => return LoadOutcome::Failed(err.into()),
    };

    let mut journal = Vec::new();
    for row in reader.deserialize::<JournalRecord>() {
        let record = match row {
            Ok(record) => record,
            // A single bad row poisons the whole load: the journal resets
            // to empty rather than keeping a partial read.
            Err(err) => return LoadOutcome::Failed(err.into()),
        };

        if let Some(category) = catalog.iter().find(|c| c.name() == record.category) {
            journal.push(Transaction::with_description(
                record.amount,
                category.clone(),
                record.date,
                record.description,
            ));
        }
    }

    LoadOutcome::Loaded(journal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Kind;
    use tempfile::TempDir;

    fn test_catalog() -> Vec<Category> {
        vec![
            Category::new("Salary", Kind::Income),
            Category::new("Groceries", Kind::Expense),
        ]
    }

    fn sample_journal(catalog: &[Category]) -> Vec<Transaction> {
        vec![
            Transaction::with_description(
                50000.0,
                catalog[0].clone(),
                "2024-01-15",
                "Salary for January",
            ),
            Transaction::with_description(
                1500.0,
                catalog[1].clone(),
                "2024-01-16",
                "Grocery purchase",
            ),
        ]
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("journal.csv");

        assert!(matches!(
            load_journal(&path, &test_catalog()),
            LoadOutcome::NotFound
        ));
    }

    #[test]
    fn test_empty_journal_still_writes_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("journal.csv");

        save_journal(&path, &[]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Amount,Category,Type,Date,Description"));
    }

    #[test]
    fn test_round_trip_preserves_order_and_fields() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("journal.csv");
        let catalog = test_catalog();
        let journal = sample_journal(&catalog);

        save_journal(&path, &journal).unwrap();

        match load_journal(&path, &catalog) {
            LoadOutcome::Loaded(reloaded) => assert_eq!(reloaded, journal),
            other => panic!("expected Loaded, got {:?}", other),
        }
    }

    #[test]
    fn test_kind_label_lands_in_type_column() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("journal.csv");
        let catalog = test_catalog();

        save_journal(&path, &sample_journal(&catalog)).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("50000.0,Salary,Income,2024-01-15,Salary for January"));
        assert!(contents.contains("1500.0,Groceries,Expense,2024-01-16,Grocery purchase"));
    }

    #[test]
    fn test_unknown_category_rows_are_dropped() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("journal.csv");

        fs::write(
            &path,
            "Amount,Category,Type,Date,Description\n\
             50000,Salary,Income,2024-01-15,Salary for January\n\
             300,Yachts,Expense,2024-01-20,Down payment\n",
        )
        .unwrap();

        match load_journal(&path, &test_catalog()) {
            LoadOutcome::Loaded(journal) => {
                assert_eq!(journal.len(), 1);
                assert_eq!(journal[0].category.name(), "Salary");
            }
            other => panic!("expected Loaded, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_amount_aborts_whole_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("journal.csv");

        // The valid first row must not survive the bad second one.
        fs::write(
            &path,
            "Amount,Category,Type,Date,Description\n\
             50000,Salary,Income,2024-01-15,Salary for January\n\
             not-a-number,Groceries,Expense,2024-01-16,Grocery purchase\n",
        )
        .unwrap();

        match load_journal(&path, &test_catalog()) {
            LoadOutcome::Failed(err) => assert!(matches!(err, LedgerError::Malformed(_))),
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn test_fields_resolve_by_header_name_not_position() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("journal.csv");

        fs::write(
            &path,
            "Category,Amount,Type,Date,Description\n\
             Groceries,1500,Expense,2024-01-16,Grocery purchase\n",
        )
        .unwrap();

        match load_journal(&path, &test_catalog()) {
            LoadOutcome::Loaded(journal) => {
                assert_eq!(journal.len(), 1);
                assert_eq!(journal[0].amount, 1500.0);
                assert_eq!(journal[0].category.name(), "Groceries");
            }
            other => panic!("expected Loaded, got {:?}", other),
        }
    }

    #[test]
    fn test_type_column_is_informational_only() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("journal.csv");

        // Wrong label in Type: the catalog's kind wins.
        fs::write(
            &path,
            "Amount,Category,Type,Date,Description\n\
             1500,Groceries,Income,2024-01-16,Grocery purchase\n",
        )
        .unwrap();

        match load_journal(&path, &test_catalog()) {
            LoadOutcome::Loaded(journal) => {
                assert_eq!(journal[0].category.kind(), Kind::Expense);
            }
            other => panic!("expected Loaded, got {:?}", other),
        }
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("journal.csv");

        save_journal(&path, &[]).unwrap();
        assert!(path.exists());
    }
}
