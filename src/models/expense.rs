//! Expense record model
//!
//! Represents a single expense entry: description, amount, category, and
//! calendar date. Records keep their insertion order in the store; a
//! stable ID assigned at creation identifies a record for edit and
//! delete operations.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;

/// Date format used for the stored date text
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single expense record
///
/// The date is kept as ISO text and parsed on demand: a record whose date
/// text no longer parses (e.g. after a hand edit of the data file) stays
/// loadable, is skipped by every date filter, and sorts at a fixed end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned at creation
    pub id: ExpenseId,

    /// What the money was spent on
    pub description: String,

    /// Amount spent (always positive)
    pub amount: Money,

    /// Spending category
    pub category: Category,

    /// Calendar date in ISO text form (YYYY-MM-DD)
    pub date: String,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last modified
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense record
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseId::new(),
            description: description.into(),
            amount,
            category,
            date: date.format(DATE_FORMAT).to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Parse the stored date text as a calendar date
    ///
    /// Returns `None` if the text does not parse; callers decide how to
    /// treat such records (filters skip them, sorts pin them to one end).
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    /// Replace all four user-facing fields in place, keeping the ID
    pub fn replace_fields(
        &mut self,
        description: impl Into<String>,
        amount: Money,
        category: Category,
        date: NaiveDate,
    ) {
        self.description = description.into();
        self.amount = amount;
        self.category = category;
        self.date = date.format(DATE_FORMAT).to_string();
        self.updated_at = Utc::now();
    }

    /// Validate the record
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        if self.parsed_date().is_none() {
            return Err(ExpenseValidationError::UnparseableDate(self.date.clone()));
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date, self.description, self.amount, self.category
        )
    }
}

/// Validation errors for expense records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    NonPositiveAmount(Money),
    UnparseableDate(String),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description must not be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero, got {}", amount)
            }
            Self::UnparseableDate(date) => {
                write!(f, "Date '{}' is not a valid YYYY-MM-DD date", date)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
