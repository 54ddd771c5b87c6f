//! Transaction model

use std::fmt;

use super::category::Category;

/// One monetary event filed under a category
///
/// The transaction owns its own copy of the category, so it stays
/// classifiable even when the catalog it came from changes underneath it.
/// Nothing is validated here: the amount may carry any sign and the date is
/// whatever string the caller collected. Input checking belongs to the
/// surface that builds the transaction, not to this type.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Amount of the event; sign is not required to match the category kind
    pub amount: f64,

    /// The category this event is filed under
    pub category: Category,

    /// Opaque date string, stored and round-tripped as is
    pub date: String,

    /// Free text, may be empty
    pub description: String,
}

impl Transaction {
    /// Create a transaction with an empty description
    pub fn new(amount: f64, category: Category, date: impl Into<String>) -> Self {
        Self::with_description(amount, category, date, "")
    }

    /// Create a transaction with all fields
    pub fn with_description(
        amount: f64,
        category: Category,
        date: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            category,
            date: date.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) - {}", self.amount, self.category.name(), self.date)
    }
}
