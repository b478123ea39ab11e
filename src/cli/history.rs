//! History CLI command
//!
//! Shows recent entries from the append-only audit log.

use clap::Args;

use crate::error::ExpenseResult;
use crate::storage::Storage;

/// Arguments for `expense history`
#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Number of entries to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

/// Handle `expense history`
pub fn handle_history(storage: &Storage, args: HistoryArgs) -> ExpenseResult<()> {
    let entries = storage.audit().read_recent(args.limit)?;

    if entries.is_empty() {
        println!("No history recorded yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry);
    }

    Ok(())
}
