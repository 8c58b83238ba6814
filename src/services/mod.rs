//! Business logic layer
//!
//! Services sit between the presentation layer and storage, validating
//! user input and keeping the persisted state in step with memory.

pub mod ledger;

pub use ledger::ExpenseLedger;
