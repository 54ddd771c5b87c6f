//! Transaction display formatting
//!
//! Formats the journal for terminal output. Entries are shown with their
//! zero-based index, which is what `tally delete` takes.

use crate::models::Transaction;

/// Format a single journal entry as a register row
pub fn format_journal_row(index: usize, transaction: &Transaction) -> String {
    format!(
        "{:>3} {:>12.2} {:16} {:10} {}",
        index,
        transaction.amount,
        truncate(transaction.category.name(), 16),
        transaction.date,
        transaction.description
    )
}

/// Format the whole journal as a register
pub fn format_journal(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3} {:>12} {:16} {:10} {}\n",
        "#", "Amount", "Category", "Date", "Description"
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for (index, transaction) in transactions.iter().enumerate() {
        output.push_str(&format_journal_row(index, transaction));
        output.push('\n');
    }

    output
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}
