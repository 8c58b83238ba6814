//! Expense display formatting
//!
//! Formats expenses as a table for terminal output.

use crate::models::{Expense, Money};

use super::text::{clip, format_date};

const MAX_DESCRIPTION: usize = 40;

/// Format a list of expenses as a table
pub fn format_expense_list(
    expenses: &[Expense],
    currency_symbol: &str,
    date_format: &str,
) -> String {
    if expenses.is_empty() {
        return "No expenses yet\n".to_string();
    }

    let desc_width = expenses
        .iter()
        .map(|e| clip(&e.description, MAX_DESCRIPTION).chars().count())
        .max()
        .unwrap_or(11)
        .max(11);

    let dates: Vec<String> = expenses
        .iter()
        .map(|e| format_date(e.date, date_format))
        .collect();
    let date_width = dates.iter().map(|d| d.chars().count()).max().unwrap_or(4).max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<desc_width$}  {:<13}  {:<date_width$}  {:>12}\n",
        "ID",
        "Description",
        "Category",
        "Date",
        "Amount",
        desc_width = desc_width,
        date_width = date_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<desc_width$}  {:-<13}  {:-<date_width$}  {:->12}\n",
        "",
        "",
        "",
        "",
        "",
        desc_width = desc_width,
        date_width = date_width,
    ));

    for (expense, date) in expenses.iter().zip(&dates) {
        output.push_str(&format!(
            "{:<12}  {:<desc_width$}  {:<13}  {:<date_width$}  {:>12}\n",
            expense.id.to_string(),
            clip(&expense.description, MAX_DESCRIPTION),
            expense.category.to_string(),
            date,
            expense.amount.format_with_symbol(currency_symbol),
            desc_width = desc_width,
            date_width = date_width,
        ));
    }

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    output.push_str(&format!(
        "{:<12}  {:<desc_width$}  {:<13}  {:<date_width$}  {:>12}\n",
        "TOTAL",
        "",
        "",
        "",
        total.format_with_symbol(currency_symbol),
        desc_width = desc_width,
        date_width = date_width,
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::NaiveDate;

    #[test]
    fn test_format_expense_list() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let expenses = vec![
            Expense::with_date("Coffee", Money::from_cents(450), Category::Food, date),
            Expense::with_date("Bus", Money::from_cents(200), Category::Transport, date),
        ];

        let output = format_expense_list(&expenses, "₹", "%Y-%m-%d");
        assert!(output.contains("Coffee"));
        assert!(output.contains("Transport"));
        assert!(output.contains("2024-05-01"));
        assert!(output.contains("₹4.50"));
        assert!(output.contains(&expenses[0].id.to_string()));
        assert!(output.contains("₹6.50"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_expense_list(&[], "$", "%Y-%m-%d"), "No expenses yet\n");
    }

    #[test]
    fn test_custom_date_format() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let tea = Expense::with_date("Tea", Money::from_cents(100), Category::Food, date);
        let expenses = vec![tea];
        let output = format_expense_list(&expenses, "$", "%d %b %Y");
        assert!(output.contains("01 May 2024"));
    }

    #[test]
    fn test_unrenderable_date_format_uses_iso() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let tea = Expense::with_date("Tea", Money::from_cents(100), Category::Food, date);
        let expenses = vec![tea];
        let output = format_expense_list(&expenses, "$", "%Q");
        assert!(output.contains("2024-05-01"));
        assert!(output.contains("Tea"));
    }
}
