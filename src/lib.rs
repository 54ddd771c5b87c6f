//! tally - command-line personal finance ledger
//!
//! This library provides the core functionality for the tally application:
//! recording income and expense transactions, classifying them against a
//! category catalog, computing running totals, and keeping the journal in a
//! flat CSV file that is rewritten in full after every mutation.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: journal file location resolution
//! - `error`: custom error types
//! - `models`: core data models (categories, transactions)
//! - `storage`: CSV snapshot persistence for the journal
//! - `ledger`: the manager that owns the journal and the catalog
//! - `display`: terminal formatting used by the CLI
//!
//! # Example
//!
//! ```rust,ignore
//! use tally::models::Transaction;
//! use tally::Ledger;
//!
//! let mut ledger = Ledger::open("journal.csv");
//! let salary = ledger.category("Salary").cloned().unwrap();
//! ledger.add(Transaction::new(50000.0, salary, "2024-01-15"));
//! println!("balance: {:.2}", ledger.balance());
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod models;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
pub use ledger::{default_catalog, Ledger};
