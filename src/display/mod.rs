//! Terminal display formatting for tally
//!
//! The CLI renders everything through these helpers; none of them touch
//! the ledger, they only format what they are handed.

pub mod category;
pub mod transaction;

pub use category::{format_catalog, format_summary};
pub use transaction::{format_journal, format_journal_row};
