//! Reports module for SpendWise
//!
//! Aggregated views over the ledger for terminal display.

pub mod spending;

pub use spending::{SpendingByCategory, SpendingReport};
