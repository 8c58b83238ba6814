//! Expense category model
//!
//! Expenses are classified into a fixed set of categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Utilities,
    Entertainment,
    Shopping,
    /// Anything else, including unrecognised values found in storage
    #[serde(other)]
    Other,
}

impl Category {
    /// All categories in display order
    pub fn all() -> &'static [Category] {
        &[
            Self::Food,
            Self::Transport,
            Self::Utilities,
            Self::Entertainment,
            Self::Shopping,
            Self::Other,
        ]
    }

    /// Parse category from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "food" => Some(Self::Food),
            "transport" | "transportation" => Some(Self::Transport),
            "utilities" | "utility" => Some(Self::Utilities),
            "entertainment" => Some(Self::Entertainment),
            "shopping" => Some(Self::Shopping),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// The lowercase key used in storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Utilities => "utilities",
            Self::Entertainment => "entertainment",
            Self::Shopping => "shopping",
            Self::Other => "other",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Food
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Food => write!(f, "Food"),
            Self::Transport => write!(f, "Transport"),
            Self::Utilities => write!(f, "Utilities"),
            Self::Entertainment => write!(f, "Entertainment"),
            Self::Shopping => write!(f, "Shopping"),
            Self::Other => write!(f, "Other"),
        }
    }
}
