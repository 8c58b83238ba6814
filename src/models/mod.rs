//! Core data models for SpendWise
//!
//! This module contains the data structures of the ledger: expenses,
//! savings goals, categories and the money type they share.

pub mod category;
pub mod expense;
pub mod goal;
pub mod ids;
pub mod money;

pub use category::Category;
pub use expense::{Expense, ExpenseValidationError};
pub use goal::{Goal, GoalValidationError};
pub use ids::{ExpenseId, GoalId};
pub use money::{Money, MoneyParseError};
