//! Expense service
//!
//! Provides business logic for expense management: validated creation,
//! full-field edits, deletion, and ID resolution. Every mutation is
//! followed by a persistence sync and an audit entry.

use chrono::NaiveDate;

use crate::audit::Operation;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Expense, ExpenseId, Money};
use crate::storage::Storage;

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub description: String,
    pub amount: Money,
    pub category: Category,
    /// Defaults to today when not given
    pub date: Option<NaiveDate>,
}

/// Input for editing an expense; unset fields keep their current values
///
/// The edit itself is always a full replacement of all four fields at the
/// record's position, with unset fields pre-filled from the current record.
#[derive(Debug, Clone, Default)]
pub struct UpdateExpenseInput {
    pub description: Option<String>,
    pub amount: Option<Money>,
    pub category: Option<Category>,
    pub date: Option<NaiveDate>,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new expense
    pub fn create(&self, input: CreateExpenseInput) -> ExpenseResult<Expense> {
        let date = input
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        let expense = Expense::new(input.description.trim(), input.amount, input.category, date);

        expense
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        self.storage.expenses.append(expense.clone())?;
        self.persist();

        self.storage.log_action(Operation::Create, &expense);

        Ok(expense)
    }

    /// Edit an expense, replacing all four fields at its position
    pub fn update(&self, id: ExpenseId, input: UpdateExpenseInput) -> ExpenseResult<Expense> {
        let mut expense = self
            .storage
            .expenses
            .get(id)?
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

        let description = input
            .description
            .unwrap_or_else(|| expense.description.clone());
        let amount = input.amount.unwrap_or(expense.amount);
        let category = input.category.unwrap_or(expense.category);
        let date = match input.date {
            Some(d) => d,
            None => expense.parsed_date().ok_or_else(|| {
                ExpenseError::Validation(format!(
                    "Stored date '{}' is not a valid date; pass --date to replace it",
                    expense.date
                ))
            })?,
        };

        expense.replace_fields(description.trim(), amount, category, date);
        expense
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        if !self.storage.expenses.replace(expense.clone())? {
            return Err(ExpenseError::expense_not_found(id.to_string()));
        }
        self.persist();

        self.storage.log_action(Operation::Update, &expense);

        Ok(expense)
    }

    /// Delete an expense by ID
    pub fn delete(&self, id: ExpenseId) -> ExpenseResult<Expense> {
        let expense = self
            .storage
            .expenses
            .get(id)?
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

        self.storage.expenses.remove(id)?;
        self.persist();

        self.storage.log_action(Operation::Delete, &expense);

        Ok(expense)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        self.storage.expenses.get(id)
    }

    /// Resolve a user-supplied identifier to an expense
    ///
    /// Accepts a full UUID, the `exp-` display form, or any unique prefix
    /// of the ID.
    pub fn resolve(&self, identifier: &str) -> ExpenseResult<Expense> {
        if let Ok(id) = identifier.parse::<ExpenseId>() {
            if let Some(expense) = self.storage.expenses.get(id)? {
                return Ok(expense);
            }
        }

        let mut matches = self
            .storage
            .expenses
            .get_all()?
            .into_iter()
            .filter(|e| e.id.matches_prefix(identifier));

        match (matches.next(), matches.next()) {
            (None, _) => Err(ExpenseError::expense_not_found(identifier)),
            (Some(expense), None) => Ok(expense),
            (Some(_), Some(_)) => Err(ExpenseError::expense_ambiguous(identifier)),
        }
    }

    /// List all expenses in storage order
    pub fn list_all(&self) -> ExpenseResult<Vec<Expense>> {
        self.storage.expenses.get_all()
    }

    /// Sync the sequence to disk after a mutation
    ///
    /// A failed write is reported but not fatal: the in-memory sequence
    /// stays authoritative for the rest of the process.
    fn persist(&self) {
        if let Err(err) = self.storage.expenses.save() {
            eprintln!("warning: failed to persist expenses: {}", err);
        }
    }
}
