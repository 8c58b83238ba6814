//! Expense CLI commands
//!
//! Implements CLI commands for recording and removing expenses.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_date, format_expense_list};
use crate::error::{SpendError, SpendResult};
use crate::models::Category;
use crate::notify::{Notification, Notifier};
use crate::services::ExpenseLedger;
use crate::storage::KeyValueStore;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense dated today
    Add {
        /// What the money was spent on
        description: String,
        /// Amount spent (e.g., "4.50" or "12")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category (food, transport, utilities, entertainment, shopping, other)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List all expenses
    List,
    /// Remove an expense
    #[command(alias = "rm")]
    Remove {
        /// Expense ID (full or short form)
        expense: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command<S: KeyValueStore>(
    ledger: &mut ExpenseLedger<S>,
    settings: &Settings,
    notifier: &mut dyn Notifier,
    cmd: ExpenseCommands,
) -> SpendResult<()> {
    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            category,
        } => {
            if description.trim().is_empty() || amount.trim().is_empty() {
                return Err(SpendError::Validation(
                    "Please enter both description and amount".into(),
                ));
            }

            let category = match category {
                Some(name) => parse_category(&name)?,
                None => settings.default_category,
            };

            let expense = ledger.add_expense(&description, &amount, category)?;
            notifier.notify(&Notification::success("Expense added successfully"));

            println!("  Description: {}", expense.description);
            println!(
                "  Amount: {}",
                expense.amount.format_with_symbol(&settings.currency_symbol)
            );
            println!("  Category: {}", expense.category);
            println!("  Date: {}", format_date(expense.date, &settings.date_format));
            println!("  ID: {}", expense.id);
        }

        ExpenseCommands::List => {
            print!(
                "{}",
                format_expense_list(
                    ledger.expenses(),
                    &settings.currency_symbol,
                    &settings.date_format
                )
            );
        }

        ExpenseCommands::Remove { expense } => {
            let id = ledger
                .find_expense(&expense)
                .map(|e| e.id.clone())
                .ok_or_else(|| SpendError::expense_not_found(&expense))?;

            if ledger.remove_expense(&id)?.is_some() {
                notifier.notify(&Notification::success("Expense deleted successfully"));
            }
        }
    }

    Ok(())
}

fn parse_category(name: &str) -> SpendResult<Category> {
    Category::parse(name).ok_or_else(|| {
        let valid: Vec<&str> = Category::all().iter().map(|c| c.as_str()).collect();
        SpendError::Validation(format!(
            "Invalid category: '{}'. Valid categories: {}",
            name,
            valid.join(", ")
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationQueue;
    use crate::storage::MemoryStore;

    fn setup() -> (ExpenseLedger<MemoryStore>, Settings, NotificationQueue) {
        (
            ExpenseLedger::open(MemoryStore::new()),
            Settings::default(),
            NotificationQueue::new(),
        )
    }

    fn add(description: &str, amount: &str, category: Option<&str>) -> ExpenseCommands {
        ExpenseCommands::Add {
            description: description.into(),
            amount: amount.into(),
            category: category.map(String::from),
        }
    }

    #[test]
    fn test_add_uses_default_category() {
        let (mut ledger, mut settings, mut queue) = setup();
        settings.default_category = Category::Shopping;

        handle_expense_command(&mut ledger, &settings, &mut queue, add("Shoes", "40", None))
            .unwrap();

        assert_eq!(ledger.expenses()[0].category, Category::Shopping);
        assert_eq!(queue.current().unwrap().message, "Expense added successfully");
    }

    #[test]
    fn test_add_with_category() {
        let (mut ledger, settings, mut queue) = setup();

        handle_expense_command(
            &mut ledger,
            &settings,
            &mut queue,
            add("Bus", "2", Some("Transport")),
        )
        .unwrap();

        assert_eq!(ledger.expenses()[0].category, Category::Transport);
    }

    #[test]
    fn test_add_missing_fields() {
        let (mut ledger, settings, mut queue) = setup();

        let err = handle_expense_command(&mut ledger, &settings, &mut queue, add("  ", "4", None))
            .unwrap_err();

        assert_eq!(err.user_message(), "Please enter both description and amount");
        assert!(ledger.expenses().is_empty());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_add_invalid_category() {
        let (mut ledger, settings, mut queue) = setup();

        let err = handle_expense_command(
            &mut ledger,
            &settings,
            &mut queue,
            add("Gift", "10", Some("presents")),
        )
        .unwrap_err();

        assert!(err.is_validation());
        assert!(err.user_message().contains("entertainment"));
        assert!(ledger.expenses().is_empty());
    }

    #[test]
    fn test_remove_by_short_id() {
        let (mut ledger, settings, mut queue) = setup();
        let expense = ledger.add_expense("Coffee", "4.50", Category::Food).unwrap();

        handle_expense_command(
            &mut ledger,
            &settings,
            &mut queue,
            ExpenseCommands::Remove {
                expense: expense.id.to_string(),
            },
        )
        .unwrap();

        assert!(ledger.expenses().is_empty());
        assert_eq!(queue.current().unwrap().message, "Expense deleted successfully");
    }

    #[test]
    fn test_remove_unknown() {
        let (mut ledger, settings, mut queue) = setup();

        let err = handle_expense_command(
            &mut ledger,
            &settings,
            &mut queue,
            ExpenseCommands::Remove {
                expense: "nope".into(),
            },
        )
        .unwrap_err();

        assert!(err.is_not_found());
    }
}
