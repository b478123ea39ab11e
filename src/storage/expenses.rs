//! Expense repository for JSON storage
//!
//! Holds the canonical ordered sequence of expense records and keeps it
//! synchronized with expenses.json. Insertion order is storage order:
//! `save` writes the sequence exactly as held in memory, and `load`
//! restores it in the same order.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::ExpenseError;
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable expense data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

/// Repository for expense persistence
///
/// The sequence lives behind an `RwLock` so the repository can expose a
/// `&self` API like the rest of the storage layer; execution is
/// single-threaded, the lock is an interior-mutability discipline.
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<Vec<Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load expenses from disk
    ///
    /// A missing or unreadable file loads as an empty sequence so startup
    /// never fails on bad durable storage; unreadable data is reported to
    /// stderr before being set aside.
    pub fn load(&self) -> Result<(), ExpenseError> {
        let file_data: ExpenseData = match read_json(&self.path) {
            Ok(data) => data,
            Err(err) => {
                eprintln!("warning: {}; starting with an empty expense list", err);
                ExpenseData::default()
            }
        };

        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = file_data.expenses;
        Ok(())
    }

    /// Save expenses to disk, preserving the in-memory order
    pub fn save(&self) -> Result<(), ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = ExpenseData {
            expenses: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Append an expense to the end of the sequence
    pub fn append(&self, expense: Expense) -> Result<(), ExpenseError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.push(expense);
        Ok(())
    }

    /// Replace the record with the same ID in place, keeping its position
    ///
    /// Returns `false` (a no-op) if no record has that ID.
    pub fn replace(&self, expense: Expense) -> Result<bool, ExpenseError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match data.iter_mut().find(|e| e.id == expense.id) {
            Some(slot) => {
                *slot = expense;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the record with the given ID, shifting later records left
    ///
    /// Returns `false` (a no-op) if no record has that ID.
    pub fn remove(&self, id: ExpenseId) -> Result<bool, ExpenseError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match data.iter().position(|e| e.id == id) {
            Some(pos) => {
                data.remove(pos);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|e| e.id == id).cloned())
    }

    /// Get all expenses in storage order
    pub fn get_all(&self) -> Result<Vec<Expense>, ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Count expenses
    pub fn count(&self) -> Result<usize, ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
