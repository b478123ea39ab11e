//! Report and export CLI commands
//!
//! Both commands run the query engine over the current view; `report`
//! renders the category breakdown to the terminal, `export` writes the
//! view (or its breakdown) to CSV.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::export_expenses_csv;
use crate::reports::CategoryBreakdown;
use crate::services::{filter_by_view, ExpenseService};
use crate::storage::Storage;

use super::{SortArgs, ViewArgs};

/// Arguments for `expense report`
#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub view: ViewArgs,
}

/// Arguments for `expense export`
#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    #[command(flatten)]
    pub sort: SortArgs,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export the category breakdown instead of the records
    #[arg(short, long)]
    pub breakdown: bool,
}

/// Handle `expense report`
pub fn handle_report(storage: &Storage, settings: &Settings, args: ReportArgs) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);

    let view = args.view.resolve(settings);
    let all = service.list_all()?;
    let shown = filter_by_view(&all, &view);

    let breakdown = CategoryBreakdown::generate(&shown);
    print!("{}", breakdown.format_terminal(&view.label(), settings));

    Ok(())
}

/// Handle `expense export`
pub fn handle_export(storage: &Storage, settings: &Settings, args: ExportArgs) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);

    let view = args.view.resolve(settings);
    let all = service.list_all()?;
    let shown = args.sort.apply(filter_by_view(&all, &view));

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path).map_err(|e| {
            ExpenseError::Export(format!("Failed to create {}: {}", path.display(), e))
        })?),
        None => Box::new(std::io::stdout()),
    };

    if args.breakdown {
        let breakdown = CategoryBreakdown::generate(&shown);
        breakdown.export_csv(&mut writer)?;
    } else {
        export_expenses_csv(&shown, &mut writer)?;
    }

    if let Some(path) = &args.output {
        eprintln!("Exported {} records to {}", shown.len(), path.display());
    }

    Ok(())
}
