//! Category display formatting

use crate::models::Category;

/// Format a list of catalog entries, one per line
pub fn format_catalog(categories: &[&Category]) -> String {
    if categories.is_empty() {
        return "No categories.\n".to_string();
    }

    let mut output = String::new();
    for category in categories {
        output.push_str(&format!("  {}\n", category));
    }
    output
}

/// Format the category summary with signed totals
///
/// Entries arrive in first-seen journal order and are printed in that
/// order.
pub fn format_summary(summary: &[(String, f64)]) -> String {
    if summary.is_empty() {
        return "Nothing to summarize yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:20} {:>12}\n", "Category", "Total"));
    output.push_str(&"-".repeat(33));
    output.push('\n');

    for (name, total) in summary {
        output.push_str(&format!("{:20} {:>+12.2}\n", name, total));
    }

    output
}
