//! CSV export functionality
//!
//! Exports a displayed view of expenses (post filter/sort) to CSV,
//! one row per record plus a totals row.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money};

/// Export a sequence of expenses to CSV
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["ID", "Date", "Category", "Description", "Amount"])
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    let mut total = Money::zero();
    for expense in expenses {
        csv_writer
            .write_record([
                expense.id.to_string(),
                expense.date.clone(),
                expense.category.name().to_string(),
                expense.description.clone(),
                format!("{:.2}", expense.amount.cents() as f64 / 100.0),
            ])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
        total += expense.amount;
    }

    csv_writer
        .write_record([
            String::new(),
            String::new(),
            String::new(),
            "TOTAL".to_string(),
            format!("{:.2}", total.cents() as f64 / 100.0),
        ])
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::NaiveDate;

    #[test]
    fn test_export_expenses() {
        let expenses = vec![
            Expense::new(
                "Lunch",
                Money::from_cents(1250),
                Category::Food,
                NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            ),
            Expense::new(
                "Bus",
                Money::from_cents(300),
                Category::Transport,
                NaiveDate::from_ymd_opt(2024, 3, 16).unwrap(),
            ),
        ];

        let mut buffer = Vec::new();
        export_expenses_csv(&expenses, &mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();

        assert!(csv.starts_with("ID,Date,Category,Description,Amount"));
        assert!(csv.contains("2024-03-15,Food,Lunch,12.50"));
        assert!(csv.contains("2024-03-16,Transport,Bus,3.00"));
        assert!(csv.contains("TOTAL,15.50"));
    }

    #[test]
    fn test_export_empty_has_header_and_zero_total() {
        let mut buffer = Vec::new();
        export_expenses_csv(&[], &mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();

        assert!(csv.starts_with("ID,Date,Category,Description,Amount"));
        assert!(csv.contains("TOTAL,0.00"));
    }

    #[test]
    fn test_export_quotes_embedded_commas() {
        let expenses = vec![Expense::new(
            "Dinner, drinks",
            Money::from_cents(4500),
            Category::Food,
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        )];

        let mut buffer = Vec::new();
        export_expenses_csv(&expenses, &mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();

        assert!(csv.contains("\"Dinner, drinks\""));
    }
}
