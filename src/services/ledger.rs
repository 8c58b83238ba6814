//! Expense ledger service
//!
//! Owns the expense and goal collections, validates user input, computes
//! spending aggregates and writes the full collections back to the
//! key-value store after every mutation.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, Snapshot};
use crate::error::{SpendError, SpendResult};
use crate::models::{Category, Expense, ExpenseId, Goal, GoalId, Money};
use crate::storage::{KeyValueStore, EXPENSES_KEY, GOALS_KEY};

/// The expense and savings-goal ledger
pub struct ExpenseLedger<S: KeyValueStore> {
    store: S,
    expenses: Vec<Expense>,
    goals: Vec<Goal>,
    audit: Option<AuditLogger>,
}

impl<S: KeyValueStore> ExpenseLedger<S> {
    /// Open a ledger over `store`, loading whatever it currently holds
    pub fn open(store: S) -> Self {
        let mut ledger = Self {
            store,
            expenses: Vec::new(),
            goals: Vec::new(),
            audit: None,
        };
        ledger.load();
        ledger
    }

    /// Record every mutation in the given audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Replace the in-memory collections with the stored ones
    ///
    /// Each collection is read independently. A missing, unreadable or
    /// malformed value leaves that collection empty.
    pub fn load(&mut self) {
        self.expenses = load_collection(&self.store, EXPENSES_KEY);
        self.goals = load_collection(&self.store, GOALS_KEY);
        for goal in &mut self.goals {
            goal.normalize();
        }
    }

    /// Write both collections to the store, overwriting prior values
    pub fn save(&mut self) -> SpendResult<()> {
        save_collection(&mut self.store, EXPENSES_KEY, &self.expenses)?;
        save_collection(&mut self.store, GOALS_KEY, &self.goals)?;
        Ok(())
    }

    /// Record a new expense dated today
    pub fn add_expense(
        &mut self,
        description: &str,
        amount_text: &str,
        category: Category,
    ) -> SpendResult<Expense> {
        let description = require_description(description, "Expense")?;
        let amount = parse_amount(amount_text)?;

        let expense = Expense::new(description, amount, category);
        expense
            .validate()
            .map_err(|e| SpendError::Validation(e.to_string()))?;

        self.expenses.push(expense.clone());
        self.save()?;

        self.record(AuditEntry::created(Snapshot::Expense(expense.clone())));

        Ok(expense)
    }

    /// Remove an expense; returns it, or `None` if no such expense exists
    pub fn remove_expense(&mut self, id: &ExpenseId) -> SpendResult<Option<Expense>> {
        let removed = self
            .expenses
            .iter()
            .position(|e| &e.id == id)
            .map(|idx| self.expenses.remove(idx));
        self.save()?;

        if let Some(expense) = &removed {
            self.record(AuditEntry::deleted(Snapshot::Expense(expense.clone())));
        }

        Ok(removed)
    }

    /// Create a new savings goal with nothing saved yet
    pub fn add_goal(&mut self, description: &str, target_text: &str) -> SpendResult<Goal> {
        let description = require_description(description, "Goal")?;
        let target = parse_amount(target_text)?;

        let goal = Goal::new(description, target);
        goal.validate()
            .map_err(|e| SpendError::Validation(e.to_string()))?;

        self.goals.push(goal.clone());
        self.save()?;

        self.record(AuditEntry::created(Snapshot::Goal(goal.clone())));

        Ok(goal)
    }

    /// Remove a goal; returns it, or `None` if no such goal exists
    pub fn remove_goal(&mut self, id: &GoalId) -> SpendResult<Option<Goal>> {
        let removed = self
            .goals
            .iter()
            .position(|g| &g.id == id)
            .map(|idx| self.goals.remove(idx));
        self.save()?;

        if let Some(goal) = &removed {
            self.record(AuditEntry::deleted(Snapshot::Goal(goal.clone())));
        }

        Ok(removed)
    }

    /// Put money toward a goal
    ///
    /// Text that does not parse as an amount counts as a zero contribution.
    /// The saved amount is clamped to `0..=target`. Returns the updated goal,
    /// or `None` if no such goal exists.
    pub fn contribute_to_goal(
        &mut self,
        id: &GoalId,
        amount_text: &str,
    ) -> SpendResult<Option<Goal>> {
        let amount = Money::parse(amount_text).unwrap_or_else(|e| {
            tracing::debug!("treating contribution '{amount_text}' as zero: {e}");
            Money::zero()
        });

        let change = self.goals.iter_mut().find(|g| &g.id == id).map(|goal| {
            let before = goal.clone();
            goal.contribute(amount);
            (before, goal.clone())
        });
        self.save()?;

        match change {
            Some((before, after)) => {
                if before != after {
                    self.record(AuditEntry::updated(
                        Snapshot::Goal(before),
                        Snapshot::Goal(after.clone()),
                    ));
                }
                Ok(Some(after))
            }
            None => Ok(None),
        }
    }

    /// Sum of all expense amounts
    pub fn total_spend(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Spending per category; categories without expenses are absent
    pub fn spend_by_category(&self) -> BTreeMap<Category, Money> {
        let mut totals = BTreeMap::new();
        for expense in &self.expenses {
            *totals.entry(expense.category).or_insert_with(Money::zero) += expense.amount;
        }
        totals
    }

    /// Expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Goals in insertion order
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn expense_count(&self) -> usize {
        self.expenses.len()
    }

    pub fn goal_count(&self) -> usize {
        self.goals.len()
    }

    /// Find an expense by full id or short display form
    ///
    /// A short form matching more than one expense finds nothing.
    pub fn find_expense(&self, identifier: &str) -> Option<&Expense> {
        find_unique(&self.expenses, identifier, |e| e.id.as_str(), |e, s| e.id.matches(s))
    }

    /// Find a goal by full id or short display form
    pub fn find_goal(&self, identifier: &str) -> Option<&Goal> {
        find_unique(&self.goals, identifier, |g| g.id.as_str(), |g, s| g.id.matches(s))
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the underlying store
    pub fn into_store(self) -> S {
        self.store
    }

    fn record(&self, entry: AuditEntry) {
        if let Some(audit) = &self.audit {
            // The mutation is already persisted; a lost audit line must not undo it
            if let Err(e) = audit.log(&entry) {
                tracing::warn!("failed to write audit entry: {e}");
            }
        }
    }
}

fn require_description<'a>(description: &'a str, entity: &str) -> SpendResult<&'a str> {
    let description = description.trim();
    if description.is_empty() {
        return Err(SpendError::Validation(format!(
            "{} description cannot be empty",
            entity
        )));
    }
    Ok(description)
}

fn parse_amount(amount_text: &str) -> SpendResult<Money> {
    let amount = Money::parse(amount_text).map_err(|e| SpendError::Validation(e.to_string()))?;
    if !amount.is_positive() {
        return Err(SpendError::Validation(format!(
            "Amount must be positive, got '{}'",
            amount_text.trim()
        )));
    }
    Ok(amount)
}

fn find_unique<'a, T>(
    items: &'a [T],
    identifier: &str,
    raw_id: impl Fn(&T) -> &str,
    matches: impl Fn(&T, &str) -> bool,
) -> Option<&'a T> {
    let identifier = identifier.trim();
    if let Some(exact) = items.iter().find(|item| raw_id(item) == identifier) {
        return Some(exact);
    }

    let mut candidates = items.iter().filter(|item| matches(item, identifier));
    match (candidates.next(), candidates.next()) {
        (Some(only), None) => Some(only),
        _ => None,
    }
}

fn load_collection<T, S>(store: &S, key: &str) -> Vec<T>
where
    T: DeserializeOwned,
    S: KeyValueStore,
{
    let raw = match store.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!("could not read '{key}', starting empty: {e}");
            return Vec::new();
        }
    };

    serde_json::from_str(&raw).unwrap_or_else(|e| {
        tracing::warn!("discarding malformed '{key}' data: {e}");
        Vec::new()
    })
}

fn save_collection<T, S>(store: &mut S, key: &str, items: &[T]) -> SpendResult<()>
where
    T: Serialize,
    S: KeyValueStore,
{
    let json = serde_json::to_string(items)?;
    store.write(key, &json)
}
