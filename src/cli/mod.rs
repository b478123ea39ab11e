//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod history;
pub mod report;

pub use expense::{
    handle_add, handle_delete, handle_edit, handle_list, handle_show, AddArgs, DeleteArgs,
    EditArgs, ListArgs, ShowArgs,
};
pub use history::{handle_history, HistoryArgs};
pub use report::{handle_export, handle_report, ExportArgs, ReportArgs};

use chrono::NaiveDate;
use clap::Args;

use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money, SortAxis, SortDirection, ViewKind, DATE_FORMAT};
use crate::services::{sort_expenses, ViewMode};

/// View-selection flags shared by `list`, `report`, and `export`
#[derive(Debug, Args)]
pub struct ViewArgs {
    /// View mode (defaults to the configured default view)
    #[arg(short, long, value_enum)]
    pub view: Option<ViewKind>,

    /// Month for the monthly view, 1-12 (defaults to the current month)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// Year for the monthly/yearly views (defaults to the current year)
    #[arg(short, long)]
    pub year: Option<i32>,
}

impl ViewArgs {
    /// Resolve the flags into a concrete view against today's date
    pub fn resolve(&self, settings: &Settings) -> ViewMode {
        let kind = self.view.unwrap_or(settings.default_view);
        let today = chrono::Local::now().date_naive();
        ViewMode::resolve(kind, self.month, self.year, today)
    }
}

/// Sort flags shared by `list` and `export`
#[derive(Debug, Args)]
pub struct SortArgs {
    /// Sort the view by this axis
    #[arg(short, long, value_enum)]
    pub sort: Option<SortAxis>,

    /// Sort descending instead of ascending
    #[arg(short, long)]
    pub desc: bool,
}

impl SortArgs {
    /// Apply the requested sort, if any
    pub fn apply(&self, expenses: Vec<Expense>) -> Vec<Expense> {
        match self.sort {
            Some(axis) => {
                let direction = if self.desc {
                    SortDirection::Descending
                } else {
                    SortDirection::Ascending
                };
                sort_expenses(expenses, axis, direction)
            }
            None => expenses,
        }
    }
}

/// Parse a user-supplied amount string
pub(crate) fn parse_amount(s: &str) -> ExpenseResult<Money> {
    Money::parse(s).map_err(|e| {
        ExpenseError::Validation(format!(
            "Invalid amount format: '{}'. Use format like '12.50' or '12'. Error: {}",
            s, e
        ))
    })
}

/// Parse a user-supplied date string
pub(crate) fn parse_date(s: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| ExpenseError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.50").unwrap().cents(), 1250);
        assert!(parse_amount("abc").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-03-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
        assert!(parse_date("15/03/2024").unwrap_err().is_validation());
    }
}
