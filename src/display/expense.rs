//! Expense display formatting
//!
//! Provides utilities for formatting expenses for terminal display,
//! including the register view and per-record detail view.

use crate::models::{Expense, Money};

use super::truncate;

/// Format a single expense for display (register row)
pub fn format_expense_row(expense: &Expense, symbol: &str) -> String {
    format!(
        "{} {:10} {:13} {:24} {:>10}",
        expense.id,
        expense.date,
        truncate(expense.category.name(), 13),
        truncate(&expense.description, 24),
        expense.amount.format_with_symbol(symbol)
    )
}

/// Format a list of expenses as a register with a totals footer
pub fn format_expense_register(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:10} {:13} {:24} {:>10}\n",
        "ID", "Date", "Category", "Description", "Amount"
    ));
    output.push_str(&"-".repeat(73));
    output.push('\n');

    let mut total = Money::zero();
    for expense in expenses {
        output.push_str(&format_expense_row(expense, symbol));
        output.push('\n');
        total += expense.amount;
    }

    output.push_str(&"-".repeat(73));
    output.push('\n');
    output.push_str(&format!(
        "{:62} {:>10}\n",
        "Total:",
        total.format_with_symbol(symbol)
    ));

    output
}

/// Format expense details for display
pub fn format_expense_details(expense: &Expense, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Description: {}\n", expense.description));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!("Category:    {}\n", expense.category));
    output.push_str(&format!("Date:        {}\n", expense.date));

    if expense.parsed_date().is_none() {
        output.push_str("             (date does not parse; excluded from date views)\n");
    }

    output.push_str(&format!(
        "Created:     {}\n",
        expense.created_at.format("%Y-%m-%d %H:%M:%S")
    ));
    output.push_str(&format!(
        "Updated:     {}\n",
        expense.updated_at.format("%Y-%m-%d %H:%M:%S")
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::NaiveDate;

    fn sample_expense() -> Expense {
        Expense::new(
            "Lunch at the corner place",
            Money::from_cents(1250),
            Category::Food,
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        )
    }

    #[test]
    fn test_register_empty() {
        assert_eq!(format_expense_register(&[], "$"), "No expenses found.\n");
    }

    #[test]
    fn test_register_rows_and_total() {
        let expenses = vec![sample_expense(), sample_expense()];
        let output = format_expense_register(&expenses, "$");

        assert!(output.contains("ID"));
        assert!(output.contains("2024-03-15"));
        assert!(output.contains("$12.50"));
        assert!(output.contains("Total:"));
        assert!(output.contains("$25.00"));
    }

    #[test]
    fn test_row_contains_id_prefix() {
        let expense = sample_expense();
        let row = format_expense_row(&expense, "$");
        assert!(row.starts_with("exp-"));
        assert!(row.contains("Food"));
    }

    #[test]
    fn test_details() {
        let expense = sample_expense();
        let output = format_expense_details(&expense, "$");

        assert!(output.contains("Description: Lunch at the corner place"));
        assert!(output.contains("Amount:      $12.50"));
        assert!(output.contains("Category:    Food"));
        assert!(!output.contains("does not parse"));
    }

    #[test]
    fn test_details_flags_bad_date() {
        let mut expense = sample_expense();
        expense.date = "garbage".to_string();

        let output = format_expense_details(&expense, "$");
        assert!(output.contains("does not parse"));
    }
}
