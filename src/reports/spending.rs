//! Spending Report
//!
//! Breaks total spending down by category with each category's share.

use crate::display::text::{percent, progress_bar, rule};
use crate::models::{Category, Money};
use crate::services::ExpenseLedger;
use crate::storage::KeyValueStore;

const BAR_WIDTH: usize = 20;

/// Spending for one category
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingByCategory {
    pub category: Category,
    pub total_spending: Money,
    /// Number of expenses in this category
    pub expense_count: usize,
    /// Share of total spending (0.0 to 100.0)
    pub percentage: f64,
}

/// Spending Report
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingReport {
    /// Categories with at least one expense, in fixed category order
    pub categories: Vec<SpendingByCategory>,
    pub total_spending: Money,
    pub total_expenses: usize,
}

impl SpendingReport {
    /// Generate a spending report from the ledger's current expenses
    pub fn generate<S: KeyValueStore>(ledger: &ExpenseLedger<S>) -> Self {
        let total_spending = ledger.total_spend();
        let expenses = ledger.expenses();

        let categories = ledger
            .spend_by_category()
            .into_iter()
            .map(|(category, total)| {
                let percentage = total.ratio_of(total_spending) * 100.0;
                SpendingByCategory {
                    category,
                    total_spending: total,
                    expense_count: expenses.iter().filter(|e| e.category == category).count(),
                    percentage,
                }
            })
            .collect();

        Self {
            categories,
            total_spending,
            total_expenses: ledger.expense_count(),
        }
    }

    /// Categories sorted by spending, largest first
    pub fn top_categories(&self, limit: usize) -> Vec<&SpendingByCategory> {
        let mut sorted: Vec<_> = self.categories.iter().collect();
        sorted.sort_by(|a, b| b.total_spending.cmp(&a.total_spending));
        sorted.truncate(limit);
        sorted
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Total Expenses: {}\n",
            self.total_spending.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!("Entries: {}\n\n", self.total_expenses));

        if self.categories.is_empty() {
            output.push_str("No expenses yet\n");
            return output;
        }

        output.push_str("Spending by Category\n");
        output.push_str(&rule(60));
        output.push('\n');

        let largest = self
            .categories
            .iter()
            .map(|c| c.total_spending)
            .max()
            .unwrap_or_default();

        for row in &self.categories {
            output.push_str(&format!(
                "{:<15} {:>12} {:>4} {:>6}  {}\n",
                row.category.to_string(),
                row.total_spending.format_with_symbol(currency_symbol),
                row.expense_count,
                percent(row.percentage),
                progress_bar(row.total_spending.ratio_of(largest), BAR_WIDTH)
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn sample_ledger() -> ExpenseLedger<MemoryStore> {
        let mut ledger = ExpenseLedger::open(MemoryStore::new());
        ledger.add_expense("Groceries", "60", Category::Food).unwrap();
        ledger.add_expense("Coffee", "15", Category::Food).unwrap();
        ledger.add_expense("Metro card", "25", Category::Transport).unwrap();
        ledger
    }

    #[test]
    fn test_generate_spending_report() {
        let report = SpendingReport::generate(&sample_ledger());

        assert_eq!(report.total_spending, Money::from_cents(10_000));
        assert_eq!(report.total_expenses, 3);
        assert_eq!(report.categories.len(), 2);

        let food = &report.categories[0];
        assert_eq!(food.category, Category::Food);
        assert_eq!(food.expense_count, 2);
        assert!((food.percentage - 75.0).abs() < 1e-9);

        let transport = &report.categories[1];
        assert_eq!(transport.category, Category::Transport);
        assert!((transport.percentage - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_report() {
        let ledger = ExpenseLedger::open(MemoryStore::new());
        let report = SpendingReport::generate(&ledger);

        assert!(report.categories.is_empty());
        assert!(report.total_spending.is_zero());
        assert!(report.format_terminal("₹").contains("No expenses yet"));
    }

    #[test]
    fn test_top_categories() {
        let mut ledger = sample_ledger();
        ledger.add_expense("Concert", "80", Category::Entertainment).unwrap();
        let report = SpendingReport::generate(&ledger);

        let top = report.top_categories(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].category, Category::Entertainment);
        assert_eq!(top[1].category, Category::Food);
    }

    #[test]
    fn test_format_terminal() {
        let report = SpendingReport::generate(&sample_ledger());
        let output = report.format_terminal("₹");

        assert!(output.contains("Total Expenses: ₹100.00"));
        assert!(output.contains("Food"));
        assert!(output.contains("₹75.00"));
        assert!(output.contains("Transport"));
    }
}
