//! Category model
//!
//! A category labels transactions as belonging to an income or expense
//! class. Within a ledger the name acts as the natural key: catalog lookups
//! are exact and case-sensitive, and when two entries share a name the
//! first one wins.

use std::fmt;
use std::str::FromStr;

/// Whether a category classifies income or expense
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Income,
    Expense,
}

impl Kind {
    /// Human-readable label, used in display output and the journal's
    /// `Type` column
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!(
                "unknown kind '{}', expected 'income' or 'expense'",
                other
            )),
        }
    }
}

/// A label for an income or expense class
///
/// Both fields are fixed at construction. Nothing rejects a duplicate name;
/// a caller that adds one makes name lookups ambiguous and gets the first
/// match.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    name: String,
    kind: Kind,
}

impl Category {
    /// Create a new category
    pub fn new(name: impl Into<String>, kind: Kind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// The category's display name and natural key
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The category's income/expense kind
    pub fn kind(&self) -> Kind {
        self.kind
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind.label())
    }
}
