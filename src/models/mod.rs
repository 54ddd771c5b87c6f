//! Core data models for tally
//!
//! This module contains the data structures that represent the ledger
//! domain: categories with their income/expense kind, and transactions.

pub mod category;
pub mod transaction;

pub use category::{Category, Kind};
pub use transaction::Transaction;
