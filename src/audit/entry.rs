//! Audit entry data structures
//!
//! An entry carries typed snapshots of the expense or goal it touched, so
//! the log reads back into the same models the ledger stores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Expense, Goal};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Operation::Create => "CREATE",
            Operation::Update => "UPDATE",
            Operation::Delete => "DELETE",
        })
    }
}

/// Kind of record an entry refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityType {
    Expense,
    Goal,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            EntityType::Expense => "Expense",
            EntityType::Goal => "Goal",
        })
    }
}

/// State of one ledger record at a point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "entity", content = "record", rename_all = "lowercase")]
pub enum Snapshot {
    Expense(Expense),
    Goal(Goal),
}

impl Snapshot {
    pub fn entity_type(&self) -> EntityType {
        match self {
            Snapshot::Expense(_) => EntityType::Expense,
            Snapshot::Goal(_) => EntityType::Goal,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Snapshot::Expense(e) => e.id.as_str(),
            Snapshot::Goal(g) => g.id.as_str(),
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Snapshot::Expense(e) => &e.description,
            Snapshot::Goal(g) => &g.description,
        }
    }

    /// Fields that differ between `self` and `later`, named as they are
    /// stored, e.g. `currentAmount: 0.00 -> 100.00`
    fn changes_to(&self, later: &Snapshot) -> Option<String> {
        let mut changes = Vec::new();
        let mut compare = |field: &str, old: String, new: String| {
            if old != new {
                changes.push(format!("{}: {} -> {}", field, old, new));
            }
        };

        match (self, later) {
            (Snapshot::Goal(old), Snapshot::Goal(new)) => {
                compare("description", old.description.clone(), new.description.clone());
                compare(
                    "targetAmount",
                    old.target_amount.to_string(),
                    new.target_amount.to_string(),
                );
                compare(
                    "currentAmount",
                    old.current_amount.to_string(),
                    new.current_amount.to_string(),
                );
            }
            (Snapshot::Expense(old), Snapshot::Expense(new)) => {
                compare("description", old.description.clone(), new.description.clone());
                compare("amount", old.amount.to_string(), new.amount.to_string());
                compare("category", old.category.to_string(), new.category.to_string());
                compare("date", old.date.to_string(), new.date.to_string());
            }
            _ => return None,
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join(", "))
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    /// ID of the affected record
    pub entity_id: String,

    /// Description of the record when the operation happened
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Snapshot>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Snapshot>,

    /// Changed fields, for updates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes: Option<String>,
}

impl AuditEntry {
    fn new(operation: Operation, subject: &Snapshot) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_id: subject.id().to_string(),
            description: subject.description().to_string(),
            before: None,
            after: None,
            changes: None,
        }
    }

    /// A record was added to the ledger
    pub fn created(record: Snapshot) -> Self {
        let mut entry = Self::new(Operation::Create, &record);
        entry.after = Some(record);
        entry
    }

    /// A record was modified in place
    pub fn updated(before: Snapshot, after: Snapshot) -> Self {
        let mut entry = Self::new(Operation::Update, &after);
        entry.changes = before.changes_to(&after);
        entry.before = Some(before);
        entry.after = Some(after);
        entry
    }

    /// A record was removed from the ledger
    pub fn deleted(record: Snapshot) -> Self {
        let mut entry = Self::new(Operation::Delete, &record);
        entry.before = Some(record);
        entry
    }

    /// Kind of record this entry is about
    pub fn entity_type(&self) -> Option<EntityType> {
        self.after
            .as_ref()
            .or(self.before.as_ref())
            .map(Snapshot::entity_type)
    }

    /// One line per entry, plus an indented line listing changes for updates
    pub fn format_human_readable(&self) -> String {
        let entity = self
            .entity_type()
            .map(|t| t.to_string())
            .unwrap_or_else(|| "Record".to_string());

        let mut output = format!(
            "[{}] {} {} {} ({})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            entity,
            self.entity_id,
            self.description
        );

        if let Some(changes) = &self.changes {
            output.push_str("\n  Changes: ");
            output.push_str(changes);
        }

        output
    }
}
