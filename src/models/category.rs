//! Expense categories
//!
//! The survey asks about a fixed, closed set of household expense categories.
//! Each category owns exactly one checkbox and one paired amount input.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A household expense category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Utilities,
    Entertainment,
    SchoolFees,
    Shopping,
    Healthcare,
}

impl ExpenseCategory {
    /// All categories, in form order
    pub const ALL: [ExpenseCategory; 5] = [
        Self::Utilities,
        Self::Entertainment,
        Self::SchoolFees,
        Self::Shopping,
        Self::Healthcare,
    ];

    /// Identifier used in element ids and submitted data
    pub const fn id(self) -> &'static str {
        match self {
            Self::Utilities => "utilities",
            Self::Entertainment => "entertainment",
            Self::SchoolFees => "school_fees",
            Self::Shopping => "shopping",
            Self::Healthcare => "healthcare",
        }
    }

    /// Human-readable label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::SchoolFees => "School Fees",
            Self::Shopping => "Shopping",
            Self::Healthcare => "Healthcare",
        }
    }

    /// Id of the checkbox element (`{category}_check`)
    pub fn checkbox_id(self) -> String {
        format!("{}_check", self.id())
    }

    /// Id of the amount element (`{category}_amount`)
    pub fn amount_id(self) -> String {
        format!("{}_amount", self.id())
    }

    /// Name used in validation messages; only the first underscore becomes a space
    pub fn message_name(self) -> String {
        self.id().replacen('_', " ", 1)
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        Self::ALL
            .into_iter()
            .find(|c| c.id() == normalized)
            .ok_or_else(|| format!("unknown expense category: {}", s))
    }
}
