//! Service layer for expense-cli
//!
//! The service layer provides business logic on top of the storage layer:
//! validated mutations in `expense`, and the pure filter/sort query engine
//! in `query`.

pub mod expense;
pub mod query;

pub use expense::{CreateExpenseInput, ExpenseService, UpdateExpenseInput};
pub use query::{filter_by_view, sort_expenses, ViewMode};
