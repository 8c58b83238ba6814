//! Audit logging system for SpendWise
//!
//! Records every create, update and delete the ledger performs, with
//! before/after snapshots, in an append-only JSONL file.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation, Snapshot};
pub use logger::AuditLogger;
