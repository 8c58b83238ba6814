//! Goal CLI commands
//!
//! Implements CLI commands for savings goals.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_goal_line, format_goal_list};
use crate::error::{SpendError, SpendResult};
use crate::notify::{Notification, Notifier};
use crate::services::ExpenseLedger;
use crate::storage::KeyValueStore;

/// Goal subcommands
#[derive(Subcommand, Debug)]
pub enum GoalCommands {
    /// Create a new savings goal
    Add {
        /// What the goal is for
        description: String,
        /// Target amount (e.g., "1000")
        target: String,
    },
    /// List all goals with progress
    List,
    /// Remove a goal
    #[command(alias = "rm")]
    Remove {
        /// Goal ID (full or short form)
        goal: String,
    },
    /// Put money toward a goal
    Contribute {
        /// Goal ID (full or short form)
        goal: String,
        /// Amount to add; negative amounts withdraw
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
}

/// Handle a goal command
pub fn handle_goal_command<S: KeyValueStore>(
    ledger: &mut ExpenseLedger<S>,
    settings: &Settings,
    notifier: &mut dyn Notifier,
    cmd: GoalCommands,
) -> SpendResult<()> {
    match cmd {
        GoalCommands::Add {
            description,
            target,
        } => {
            if description.trim().is_empty() || target.trim().is_empty() {
                return Err(SpendError::Validation(
                    "Please enter both goal description and target amount".into(),
                ));
            }

            let goal = ledger.add_goal(&description, &target)?;
            notifier.notify(&Notification::success("Financial goal added successfully"));

            println!("  Description: {}", goal.description);
            println!(
                "  Target: {}",
                goal.target_amount.format_with_symbol(&settings.currency_symbol)
            );
            println!("  ID: {}", goal.id);
        }

        GoalCommands::List => {
            print!(
                "{}",
                format_goal_list(ledger.goals(), &settings.currency_symbol)
            );
        }

        GoalCommands::Remove { goal } => {
            let id = ledger
                .find_goal(&goal)
                .map(|g| g.id.clone())
                .ok_or_else(|| SpendError::goal_not_found(&goal))?;

            if ledger.remove_goal(&id)?.is_some() {
                notifier.notify(&Notification::success(
                    "Financial goal deleted successfully",
                ));
            }
        }

        GoalCommands::Contribute { goal, amount } => {
            let id = ledger
                .find_goal(&goal)
                .map(|g| g.id.clone())
                .ok_or_else(|| SpendError::goal_not_found(&goal))?;

            if let Some(updated) = ledger.contribute_to_goal(&id, &amount)? {
                print!(
                    "{}",
                    format_goal_line(&updated, &settings.currency_symbol)
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::notify::NotificationQueue;
    use crate::storage::MemoryStore;

    fn setup() -> (ExpenseLedger<MemoryStore>, Settings, NotificationQueue) {
        (
            ExpenseLedger::open(MemoryStore::new()),
            Settings::default(),
            NotificationQueue::new(),
        )
    }

    #[test]
    fn test_add_goal() {
        let (mut ledger, settings, mut queue) = setup();

        handle_goal_command(
            &mut ledger,
            &settings,
            &mut queue,
            GoalCommands::Add {
                description: "Vacation".into(),
                target: "1000".into(),
            },
        )
        .unwrap();

        assert_eq!(ledger.goals().len(), 1);
        assert_eq!(
            queue.current().unwrap().message,
            "Financial goal added successfully"
        );
    }

    #[test]
    fn test_add_goal_missing_target() {
        let (mut ledger, settings, mut queue) = setup();

        let err = handle_goal_command(
            &mut ledger,
            &settings,
            &mut queue,
            GoalCommands::Add {
                description: "Vacation".into(),
                target: "".into(),
            },
        )
        .unwrap_err();

        assert_eq!(
            err.user_message(),
            "Please enter both goal description and target amount"
        );
        assert!(ledger.goals().is_empty());
    }

    #[test]
    fn test_contribute_clamps_to_target() {
        let (mut ledger, settings, mut queue) = setup();
        let goal = ledger.add_goal("Vacation", "1000").unwrap();

        handle_goal_command(
            &mut ledger,
            &settings,
            &mut queue,
            GoalCommands::Contribute {
                goal: goal.id.to_string(),
                amount: "1500".into(),
            },
        )
        .unwrap();

        assert_eq!(ledger.goals()[0].current_amount, Money::from_cents(100_000));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_contribute_unknown_goal() {
        let (mut ledger, settings, mut queue) = setup();

        let err = handle_goal_command(
            &mut ledger,
            &settings,
            &mut queue,
            GoalCommands::Contribute {
                goal: "missing".into(),
                amount: "10".into(),
            },
        )
        .unwrap_err();

        assert!(err.is_not_found());
    }

    #[test]
    fn test_remove_goal() {
        let (mut ledger, settings, mut queue) = setup();
        let goal = ledger.add_goal("Laptop", "800").unwrap();

        handle_goal_command(
            &mut ledger,
            &settings,
            &mut queue,
            GoalCommands::Remove {
                goal: goal.id.as_str().to_string(),
            },
        )
        .unwrap();

        assert!(ledger.goals().is_empty());
        assert_eq!(
            queue.current().unwrap().message,
            "Financial goal deleted successfully"
        );
    }
}
