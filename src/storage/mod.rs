//! Storage layer for tally
//!
//! The journal is persisted as a whole-file CSV snapshot: every save
//! rewrites the file from scratch, and the load runs once when a ledger is
//! opened. The category catalog is never persisted.

pub mod journal;

pub use journal::{load_journal, save_journal, LoadOutcome};
