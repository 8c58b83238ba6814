//! SpendWise - personal expense and savings-goal tracker
//!
//! Records everyday expenses by category, tracks progress toward savings
//! goals and keeps both collections as JSON documents in a key-value store.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, expenses, goals, categories)
//! - `storage`: Key-value store port and JSON file helpers
//! - `services`: The expense ledger
//! - `audit`: Audit logging system
//! - `reports`: Spending summaries
//! - `display`: Terminal formatting
//! - `notify`: Success and error notifications
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use spendwise::models::{Category, Money};
//! use spendwise::services::ExpenseLedger;
//! use spendwise::storage::MemoryStore;
//!
//! let mut ledger = ExpenseLedger::open(MemoryStore::new());
//! ledger.add_expense("Coffee", "4.50", Category::Food)?;
//! assert_eq!(ledger.total_spend(), Money::from_cents(450));
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod notify;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::SpendError;
