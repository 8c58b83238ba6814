//! Expense model
//!
//! A single recorded spend: what it was for, how much, when and in which
//! category. Expenses are immutable once recorded.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// What the money was spent on
    pub description: String,

    /// Amount spent (always positive)
    pub amount: Money,

    /// Local calendar date the expense was recorded
    #[serde(with = "expense_date")]
    pub date: NaiveDate,

    /// Spending category
    pub category: Category,
}

impl Expense {
    /// Create a new expense dated today (local time)
    pub fn new(description: impl Into<String>, amount: Money, category: Category) -> Self {
        Self::with_date(description, amount, category, Local::now().date_naive())
    }

    /// Create a new expense on a specific date
    pub fn with_date(
        description: impl Into<String>,
        amount: Money,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            description: description.into(),
            amount,
            date,
            category,
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.description, self.amount, self.category)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    NonPositiveAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Expense description cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be positive, got {}", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// Serde adapter for expense dates
///
/// Writes ISO `YYYY-MM-DD`; also reads the `M/D/YYYY` locale form.
mod expense_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const ISO_FORMAT: &str = "%Y-%m-%d";
    const LOCALE_FORMAT: &str = "%m/%d/%Y";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(ISO_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let raw = raw.trim();
        NaiveDate::parse_from_str(raw, ISO_FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(raw, LOCALE_FORMAT))
            .map_err(|_| serde::de::Error::custom(format!("unrecognised date: {}", raw)))
    }
}
