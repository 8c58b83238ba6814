//! Savings goal model
//!
//! A goal has a target amount and tracks how much has been put toward it.
//! The current amount always stays within `0..=target`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;

/// A savings goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Unique identifier
    pub id: GoalId,

    /// What the goal is for
    pub description: String,

    /// Amount to reach
    pub target_amount: Money,

    /// Amount saved so far
    pub current_amount: Money,
}

impl Goal {
    /// Create a new goal with nothing saved yet
    pub fn new(description: impl Into<String>, target_amount: Money) -> Self {
        Self {
            id: GoalId::new(),
            description: description.into(),
            target_amount,
            current_amount: Money::zero(),
        }
    }

    /// Add a contribution, keeping the current amount within `0..=target`
    ///
    /// Negative contributions withdraw, but never below zero.
    pub fn contribute(&mut self, amount: Money) {
        let ceiling = self.ceiling();
        self.current_amount = (self.current_amount + amount).clamp(Money::zero(), ceiling);
    }

    /// Pull the current amount back into `0..=target`
    pub fn normalize(&mut self) {
        let ceiling = self.ceiling();
        self.current_amount = self.current_amount.clamp(Money::zero(), ceiling);
    }

    fn ceiling(&self) -> Money {
        if self.target_amount.is_negative() {
            Money::zero()
        } else {
            self.target_amount
        }
    }

    /// Amount still needed to reach the target
    pub fn remaining(&self) -> Money {
        let remaining = self.target_amount - self.current_amount;
        if remaining.is_negative() {
            Money::zero()
        } else {
            remaining
        }
    }

    /// Whether the target has been reached
    pub fn is_complete(&self) -> bool {
        self.target_amount.is_positive() && self.current_amount >= self.target_amount
    }

    /// Progress toward the target as a percentage (0.0 to 100.0)
    pub fn progress_percent(&self) -> f64 {
        (self.current_amount.ratio_of(self.target_amount) * 100.0).clamp(0.0, 100.0)
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.description.trim().is_empty() {
            return Err(GoalValidationError::EmptyDescription);
        }

        if !self.target_amount.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget(self.target_amount));
        }

        Ok(())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} / {})",
            self.description, self.current_amount, self.target_amount
        )
    }
}

/// Validation errors for goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyDescription,
    NonPositiveTarget(Money),
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Goal description cannot be empty"),
            Self::NonPositiveTarget(amount) => {
                write!(f, "Goal target must be positive, got {}", amount)
            }
        }
    }
}

impl std::error::Error for GoalValidationError {}
