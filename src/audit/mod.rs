//! Audit logging system for expense-cli
//!
//! Records every create, update, and delete operation in an append-only
//! audit log, one JSON line per entry. The `history` command reads the
//! log back for display.

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
