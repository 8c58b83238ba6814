//! Goal display formatting
//!
//! Shows each savings goal with a progress bar.

use crate::models::Goal;

use super::text::{clip, percent, progress_bar};

const BAR_WIDTH: usize = 20;

/// Format the list of goals with progress bars
pub fn format_goal_list(goals: &[Goal], currency_symbol: &str) -> String {
    if goals.is_empty() {
        return "No financial goals yet\n".to_string();
    }

    let mut output = String::new();
    for goal in goals {
        output.push_str(&format_goal_line(goal, currency_symbol));
    }
    output
}

/// Format a single goal as two lines: header and progress bar
pub fn format_goal_line(goal: &Goal, currency_symbol: &str) -> String {
    let status = if goal.is_complete() { "  (complete)" } else { "" };
    let progress = goal.progress_percent();

    format!(
        "{:<14} {}  {} / {}{}\n               {} {}\n",
        goal.id.to_string(),
        clip(&goal.description, 40),
        goal.current_amount.format_with_symbol(currency_symbol),
        goal.target_amount.format_with_symbol(currency_symbol),
        status,
        progress_bar(progress / 100.0, BAR_WIDTH),
        percent(progress),
    )
}
