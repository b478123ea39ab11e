//! Query engine: pure filtering and sorting over the expense sequence
//!
//! Filtering and sorting never mutate their input and always preserve the
//! relative order of records they keep, so a view is a stable subsequence
//! of the store. All parameters (including "today" for the daily view) are
//! resolved up front, which keeps the functions themselves deterministic.

use chrono::{Datelike, NaiveDate};

use crate::models::{Expense, SortAxis, SortDirection, ViewKind};

/// A fully-resolved view: the filter granularity plus its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Records dated exactly `date`
    Daily(NaiveDate),
    /// Records in the given month (1-12) and year
    Monthly { month: u32, year: i32 },
    /// Records in the given year
    Yearly { year: i32 },
    /// No filtering
    All,
}

impl ViewMode {
    /// Resolve a view selection against a reference date
    ///
    /// Unspecified month/year parameters default to the reference date's
    /// month/year, mirroring the picker defaults of the view selector.
    pub fn resolve(kind: ViewKind, month: Option<u32>, year: Option<i32>, today: NaiveDate) -> Self {
        match kind {
            ViewKind::Daily => ViewMode::Daily(today),
            ViewKind::Monthly => ViewMode::Monthly {
                month: month.unwrap_or_else(|| today.month()),
                year: year.unwrap_or_else(|| today.year()),
            },
            ViewKind::Yearly => ViewMode::Yearly {
                year: year.unwrap_or_else(|| today.year()),
            },
            ViewKind::All => ViewMode::All,
        }
    }

    /// Check whether a record date falls inside this view
    ///
    /// `None` (an unparseable stored date) never matches a date-based
    /// view; the All view keeps every record.
    fn matches(&self, date: Option<NaiveDate>) -> bool {
        match (self, date) {
            (ViewMode::All, _) => true,
            (_, None) => false,
            (ViewMode::Daily(day), Some(d)) => d == *day,
            (ViewMode::Monthly { month, year }, Some(d)) => {
                d.month() == *month && d.year() == *year
            }
            (ViewMode::Yearly { year }, Some(d)) => d.year() == *year,
        }
    }

    /// Short label for report headers
    pub fn label(&self) -> String {
        match self {
            ViewMode::Daily(day) => format!("daily ({})", day),
            ViewMode::Monthly { month, year } => format!("monthly ({:04}-{:02})", year, month),
            ViewMode::Yearly { year } => format!("yearly ({})", year),
            ViewMode::All => "all".to_string(),
        }
    }
}

/// Keep only the records matching the view, preserving input order
pub fn filter_by_view(expenses: &[Expense], view: &ViewMode) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|e| view.matches(e.parsed_date()))
        .cloned()
        .collect()
}

/// Sort a view into a new sequence; ties keep their relative input order
///
/// Date sorting compares parsed dates; records whose stored date does not
/// parse compare equal to each other and sort before every parseable date
/// in ascending order (after, in descending order).
pub fn sort_expenses(
    mut expenses: Vec<Expense>,
    axis: SortAxis,
    direction: SortDirection,
) -> Vec<Expense> {
    match (axis, direction) {
        (SortAxis::Amount, SortDirection::Ascending) => {
            expenses.sort_by(|a, b| a.amount.cmp(&b.amount));
        }
        (SortAxis::Amount, SortDirection::Descending) => {
            expenses.sort_by(|a, b| b.amount.cmp(&a.amount));
        }
        (SortAxis::Date, SortDirection::Ascending) => {
            expenses.sort_by(|a, b| a.parsed_date().cmp(&b.parsed_date()));
        }
        (SortAxis::Date, SortDirection::Descending) => {
            expenses.sort_by(|a, b| b.parsed_date().cmp(&a.parsed_date()));
        }
    }
    expenses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};

    fn expense_on(description: &str, cents: i64, date: &str) -> Expense {
        let mut e = Expense::new(
            description,
            Money::from_cents(cents),
            Category::Food,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        e.date = date.to_string();
        e
    }

    fn descriptions(expenses: &[Expense]) -> Vec<&str> {
        expenses.iter().map(|e| e.description.as_str()).collect()
    }

    #[test]
    fn test_resolve_defaults_from_today() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

        assert_eq!(
            ViewMode::resolve(ViewKind::Daily, None, None, today),
            ViewMode::Daily(today)
        );
        assert_eq!(
            ViewMode::resolve(ViewKind::Monthly, None, None, today),
            ViewMode::Monthly { month: 3, year: 2024 }
        );
        assert_eq!(
            ViewMode::resolve(ViewKind::Monthly, Some(7), Some(2023), today),
            ViewMode::Monthly { month: 7, year: 2023 }
        );
        assert_eq!(
            ViewMode::resolve(ViewKind::Yearly, None, None, today),
            ViewMode::Yearly { year: 2024 }
        );
        assert_eq!(ViewMode::resolve(ViewKind::All, None, None, today), ViewMode::All);
    }

    #[test]
    fn test_daily_filter() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let expenses = vec![
            expense_on("today", 100, "2024-03-15"),
            expense_on("yesterday", 200, "2024-03-14"),
            expense_on("also today", 300, "2024-03-15"),
        ];

        let view = ViewMode::Daily(today);
        let filtered = filter_by_view(&expenses, &view);
        assert_eq!(descriptions(&filtered), ["today", "also today"]);
    }

    #[test]
    fn test_monthly_filter() {
        let expenses = vec![
            expense_on("march", 100, "2024-03-01"),
            expense_on("april", 200, "2024-04-01"),
            expense_on("march again", 300, "2024-03-31"),
            expense_on("march last year", 400, "2023-03-15"),
        ];

        let view = ViewMode::Monthly { month: 3, year: 2024 };
        let filtered = filter_by_view(&expenses, &view);
        assert_eq!(descriptions(&filtered), ["march", "march again"]);
    }

    #[test]
    fn test_yearly_filter() {
        let expenses = vec![
            expense_on("this year", 100, "2024-01-10"),
            expense_on("last year", 200, "2023-12-31"),
            expense_on("december", 300, "2024-12-31"),
        ];

        let view = ViewMode::Yearly { year: 2024 };
        let filtered = filter_by_view(&expenses, &view);
        assert_eq!(descriptions(&filtered), ["this year", "december"]);
    }

    #[test]
    fn test_all_view_keeps_everything() {
        let expenses = vec![
            expense_on("a", 100, "2024-03-01"),
            expense_on("bad date", 200, "garbage"),
        ];

        let filtered = filter_by_view(&expenses, &ViewMode::All);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_unparseable_date_never_matches_date_views() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let expenses = vec![expense_on("bad date", 200, "garbage")];

        assert!(filter_by_view(&expenses, &ViewMode::Daily(today)).is_empty());
        assert!(filter_by_view(&expenses, &ViewMode::Monthly { month: 3, year: 2024 }).is_empty());
        assert!(filter_by_view(&expenses, &ViewMode::Yearly { year: 2024 }).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let expenses = vec![
            expense_on("march", 100, "2024-03-01"),
            expense_on("april", 200, "2024-04-01"),
            expense_on("march again", 300, "2024-03-31"),
        ];

        let view = ViewMode::Monthly { month: 3, year: 2024 };
        let once = filter_by_view(&expenses, &view);
        let twice = filter_by_view(&once, &view);
        assert_eq!(descriptions(&once), descriptions(&twice));
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let expenses = vec![
            expense_on("march", 100, "2024-03-01"),
            expense_on("april", 200, "2024-04-01"),
        ];

        let view = ViewMode::Monthly { month: 3, year: 2024 };
        let _ = filter_by_view(&expenses, &view);
        assert_eq!(descriptions(&expenses), ["march", "april"]);
    }

    #[test]
    fn test_sort_by_amount_both_directions() {
        let expenses = vec![
            expense_on("fifty", 5000, "2024-03-01"),
            expense_on("ten", 1000, "2024-03-02"),
            expense_on("thirty", 3000, "2024-03-03"),
        ];

        let asc = sort_expenses(expenses.clone(), SortAxis::Amount, SortDirection::Ascending);
        assert_eq!(descriptions(&asc), ["ten", "thirty", "fifty"]);

        let desc = sort_expenses(expenses, SortAxis::Amount, SortDirection::Descending);
        assert_eq!(descriptions(&desc), ["fifty", "thirty", "ten"]);
    }

    #[test]
    fn test_sort_by_amount_ties_are_stable() {
        let expenses = vec![
            expense_on("first", 1000, "2024-03-01"),
            expense_on("second", 1000, "2024-03-02"),
            expense_on("cheap", 500, "2024-03-03"),
            expense_on("third", 1000, "2024-03-04"),
        ];

        let asc = sort_expenses(expenses.clone(), SortAxis::Amount, SortDirection::Ascending);
        assert_eq!(descriptions(&asc), ["cheap", "first", "second", "third"]);

        let desc = sort_expenses(expenses, SortAxis::Amount, SortDirection::Descending);
        assert_eq!(descriptions(&desc), ["first", "second", "third", "cheap"]);
    }

    #[test]
    fn test_sort_by_date_both_directions() {
        let expenses = vec![
            expense_on("late", 100, "2024-06-01"),
            expense_on("early", 200, "2024-01-01"),
            expense_on("middle", 300, "2024-03-01"),
        ];

        let asc = sort_expenses(expenses.clone(), SortAxis::Date, SortDirection::Ascending);
        assert_eq!(descriptions(&asc), ["early", "middle", "late"]);

        let desc = sort_expenses(expenses, SortAxis::Date, SortDirection::Descending);
        assert_eq!(descriptions(&desc), ["late", "middle", "early"]);
    }

    #[test]
    fn test_sort_unparseable_dates_deterministic() {
        let expenses = vec![
            expense_on("late", 100, "2024-06-01"),
            expense_on("bad one", 200, "garbage"),
            expense_on("early", 300, "2024-01-01"),
            expense_on("bad two", 400, "also garbage"),
        ];

        // Ascending: unparseable dates group at the front, keeping their
        // relative order; descending: at the back.
        let asc = sort_expenses(expenses.clone(), SortAxis::Date, SortDirection::Ascending);
        assert_eq!(descriptions(&asc), ["bad one", "bad two", "early", "late"]);

        let desc = sort_expenses(expenses, SortAxis::Date, SortDirection::Descending);
        assert_eq!(descriptions(&desc), ["late", "early", "bad one", "bad two"]);
    }
}
