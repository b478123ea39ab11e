//! Storage layer for expense-cli
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The expense sequence on disk mirrors the in-memory sequence
//! after every mutation; the atomic write keeps partial states from ever
//! being observable.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};

use crate::audit::{AuditEntry, AuditLogger, Operation};
use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::models::Expense;

/// Main storage coordinator that provides access to the repository and audit log
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: ExpensePaths) -> Result<Self, ExpenseError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), ExpenseError> {
        self.expenses.load()
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record a mutation in the audit log
    ///
    /// Audit failures are reported to stderr and otherwise swallowed; a
    /// logging problem must never fail the mutation it describes.
    pub fn log_action(&self, operation: Operation, expense: &Expense) {
        let entry = AuditEntry::for_expense(operation, expense);
        if let Err(err) = self.audit.log(&entry) {
            eprintln!("warning: failed to write audit log: {}", err);
        }
    }
}
