use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_cli::cli::{
    handle_add, handle_delete, handle_edit, handle_export, handle_history, handle_list,
    handle_report, handle_show, AddArgs, DeleteArgs, EditArgs, ExportArgs, HistoryArgs, ListArgs,
    ReportArgs, ShowArgs,
};
use expense_cli::config::{paths::ExpensePaths, settings::Settings, Theme};
use expense_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "expense-cli is a terminal-based personal expense tracker. It records \
                  expenses with a description, amount, category, and date, shows them \
                  filtered by day, month, or year, and breaks spending down by category."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new expense
    Add(AddArgs),

    /// List expenses for a view
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show one expense in detail
    Show(ShowArgs),

    /// Edit an expense
    Edit(EditArgs),

    /// Delete an expense
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// Show the category breakdown for a view
    Report(ReportArgs),

    /// Export a view to CSV
    Export(ExportArgs),

    /// Show recent changes from the audit log
    History(HistoryArgs),

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config {
        /// Set the display theme
        #[arg(long, value_enum)]
        theme: Option<Theme>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Add(args)) => handle_add(&storage, args)?,
        Some(Commands::List(args)) => handle_list(&storage, &settings, args)?,
        Some(Commands::Show(args)) => handle_show(&storage, &settings, args)?,
        Some(Commands::Edit(args)) => handle_edit(&storage, args)?,
        Some(Commands::Delete(args)) => handle_delete(&storage, args)?,
        Some(Commands::Report(args)) => handle_report(&storage, &settings, args)?,
        Some(Commands::Export(args)) => handle_export(&storage, &settings, args)?,
        Some(Commands::History(args)) => handle_history(&storage, args)?,
        Some(Commands::Init) => {
            println!("Initializing expense-cli at: {}", paths.base_dir().display());
            storage.expenses.save()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'expense add <description> <amount> --category <category>' to record an expense.");
        }
        Some(Commands::Config { theme }) => {
            if let Some(theme) = theme {
                let mut settings = settings;
                settings.theme = theme;
                settings.save(&paths)?;
                println!("Theme set to: {}", settings.theme);
            } else {
                println!("expense-cli Configuration");
                println!("=========================");
                println!("Config directory: {}", paths.base_dir().display());
                println!("Data directory:   {}", paths.data_dir().display());
                println!();
                println!("Settings:");
                println!("  Default view:    {}", settings.default_view);
                println!("  Theme:           {}", settings.theme);
                println!("  Currency symbol: {}", settings.currency_symbol);
                println!("  Chart width:     {}", settings.chart_width);
            }
        }
        None => {
            println!("expense-cli - Terminal-based personal expense tracker");
            println!();
            println!("Run 'expense --help' for usage information.");
            println!("Run 'expense list' to see your expenses.");
        }
    }

    Ok(())
}
