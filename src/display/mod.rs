//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger data for terminal display.

pub mod expense;
pub mod goal;
pub mod text;

pub use expense::format_expense_list;
pub use goal::{format_goal_line, format_goal_list};
pub use text::format_date;
