//! Export module for expense-cli
//!
//! Writes displayed views out of the application in CSV form.

pub mod csv;

pub use self::csv::export_expenses_csv;
