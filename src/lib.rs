//! expense-cli - Terminal-based personal expense tracker
//!
//! This library provides the core functionality for the expense-cli
//! application: an ordered, JSON-backed store of expense records with
//! filtered views (daily/monthly/yearly), stable sorting, and a
//! per-category breakdown report.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, categories, money, views)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic and the pure query engine
//! - `reports`: Category breakdown aggregation
//! - `display`: Terminal formatting
//! - `export`: CSV export
//! - `audit`: Append-only audit logging
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_cli::config::{paths::ExpensePaths, settings::Settings};
//! use expense_cli::storage::Storage;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::ExpenseError;
