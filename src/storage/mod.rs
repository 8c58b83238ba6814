//! Storage layer for SpendWise
//!
//! Provides the key-value storage port the ledger persists through, plus
//! whole-file helpers with atomic replacement and automatic directory creation.

pub mod file_io;
pub mod store;

pub use file_io::{read_text, write_text_atomic};
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Key holding the JSON array of expenses
pub const EXPENSES_KEY: &str = "expenses";

/// Key holding the JSON array of savings goals
pub const GOALS_KEY: &str = "goals";
