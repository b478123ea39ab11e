//! Reports for expense-cli
//!
//! Aggregation over displayed views: the category breakdown with its
//! terminal chart rendering and CSV form.

pub mod breakdown;

pub use breakdown::{CategoryBreakdown, CategoryTotal};
