//! CLI commands for summaries and history
//!
//! Read-only views over the ledger and the audit log.

use crate::audit::AuditLogger;
use crate::config::Settings;
use crate::display::format_goal_list;
use crate::display::text::rule;
use crate::error::SpendResult;
use crate::reports::SpendingReport;
use crate::services::ExpenseLedger;
use crate::storage::KeyValueStore;

/// Print total spending, the per-category breakdown and goal progress
pub fn handle_summary<S: KeyValueStore>(ledger: &ExpenseLedger<S>, settings: &Settings) {
    let report = SpendingReport::generate(ledger);
    print!("{}", report.format_terminal(&settings.currency_symbol));

    println!();
    println!("Financial Goals");
    println!("{}", rule(60));
    print!(
        "{}",
        format_goal_list(ledger.goals(), &settings.currency_symbol)
    );
}

/// Print the most recent audit log entries, oldest first
pub fn handle_history(logger: &AuditLogger, count: usize) -> SpendResult<()> {
    let entries = logger.read_recent(count)?;

    if entries.is_empty() {
        println!("No history yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
