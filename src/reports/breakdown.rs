//! Category breakdown report
//!
//! Aggregates a displayed subsequence of expenses into a grand total and
//! per-category subtotals, and renders the result as a text bar chart.
//! Categories appear in order of their first appearance in the input, so
//! the chart ordering follows the view ordering, not the category list.

use std::io::Write;

use crate::config::settings::{Settings, Theme};
use crate::display::format_bar;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Expense, Money};

/// Subtotal for one category
#[derive(Debug, Clone)]
pub struct CategoryTotal {
    /// The category
    pub category: Category,
    /// Sum of amounts in this category
    pub total: Money,
    /// Number of expenses in this category
    pub count: usize,
    /// Share of the grand total, 0-100
    pub percentage: f64,
}

/// Aggregate over a displayed subsequence of expenses
#[derive(Debug, Clone)]
pub struct CategoryBreakdown {
    /// Grand total across all records
    pub total: Money,
    /// Per-category subtotals, in order of first appearance
    pub entries: Vec<CategoryTotal>,
    /// Number of records aggregated
    pub record_count: usize,
}

impl CategoryBreakdown {
    /// Aggregate a subsequence of expenses
    ///
    /// An empty input yields a zero total and no entries; the placeholder
    /// for that case is the renderer's concern, not done here.
    pub fn generate(expenses: &[Expense]) -> Self {
        let mut entries: Vec<CategoryTotal> = Vec::new();

        for expense in expenses {
            match entries.iter_mut().find(|e| e.category == expense.category) {
                Some(entry) => {
                    entry.total += expense.amount;
                    entry.count += 1;
                }
                None => entries.push(CategoryTotal {
                    category: expense.category,
                    total: expense.amount,
                    count: 1,
                    percentage: 0.0,
                }),
            }
        }

        let total: Money = expenses.iter().map(|e| e.amount).sum();

        for entry in &mut entries {
            entry.percentage = if total.is_zero() {
                0.0
            } else {
                (entry.total.cents() as f64 / total.cents() as f64) * 100.0
            };
        }

        Self {
            total,
            entries,
            record_count: expenses.len(),
        }
    }

    /// Format the breakdown for terminal display
    pub fn format_terminal(&self, view_label: &str, settings: &Settings) -> String {
        let mut output = String::new();
        let symbol = settings.currency_symbol.as_str();

        output.push_str(&format!("Expense Report: {}\n", view_label));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "Total: {}   Records: {}\n\n",
            self.total.format_with_symbol(symbol),
            self.record_count
        ));

        if self.entries.is_empty() {
            // Placeholder stands in for the chart when there is no data
            output.push_str("No expenses to chart.\n");
            return output;
        }

        let empty_fill = match settings.theme {
            Theme::Light => '░',
            Theme::Dark => '·',
        };
        let max_cents = self
            .entries
            .iter()
            .map(|e| e.total.cents())
            .max()
            .unwrap_or(0);

        for entry in &self.entries {
            let bar = format_bar(
                entry.total.cents() as f64,
                max_cents as f64,
                settings.chart_width,
                empty_fill,
            );
            output.push_str(&format!(
                "{:<15} {} {:>10} {:>6.1}%\n",
                entry.category.name(),
                bar,
                entry.total.format_with_symbol(symbol),
                entry.percentage
            ));
        }

        output
    }

    /// Export the breakdown to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> ExpenseResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer
            .write_record(["Category", "Total", "Count", "Percentage"])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;

        for entry in &self.entries {
            csv_writer
                .write_record([
                    entry.category.name().to_string(),
                    format!("{:.2}", entry.total.cents() as f64 / 100.0),
                    entry.count.to_string(),
                    format!("{:.2}", entry.percentage),
                ])
                .map_err(|e| ExpenseError::Export(e.to_string()))?;
        }

        csv_writer
            .write_record([
                "TOTAL".to_string(),
                format!("{:.2}", self.total.cents() as f64 / 100.0),
                self.record_count.to_string(),
                String::new(),
            ])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;

        csv_writer
            .flush()
            .map_err(|e| ExpenseError::Export(e.to_string()))?;

        Ok(())
    }
}
