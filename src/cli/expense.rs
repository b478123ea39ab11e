//! Expense CLI commands
//!
//! Implements the add/list/show/edit/delete commands. This is the input
//! boundary: raw argument text is validated here (and in the service
//! layer) before any mutation happens.

use clap::Args;

use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_register};
use crate::error::ExpenseResult;
use crate::models::Category;
use crate::services::{filter_by_view, CreateExpenseInput, ExpenseService, UpdateExpenseInput};
use crate::storage::Storage;

use super::{parse_amount, parse_date, SortArgs, ViewArgs};

/// Arguments for `expense add`
#[derive(Debug, Args)]
pub struct AddArgs {
    /// What the money was spent on
    pub description: String,

    /// Amount spent (e.g. "12.50")
    pub amount: String,

    /// Spending category
    #[arg(short, long, value_enum)]
    pub category: Category,

    /// Expense date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Arguments for `expense list`
#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    #[command(flatten)]
    pub sort: SortArgs,
}

/// Arguments for `expense show`
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Expense ID (or unique prefix)
    pub id: String,
}

/// Arguments for `expense edit`
#[derive(Debug, Args)]
pub struct EditArgs {
    /// Expense ID (or unique prefix)
    pub id: String,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// New amount
    #[arg(short, long)]
    pub amount: Option<String>,

    /// New category
    #[arg(short, long, value_enum)]
    pub category: Option<Category>,

    /// New date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Arguments for `expense delete`
#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Expense ID (or unique prefix)
    pub id: String,
}

/// Handle `expense add`
pub fn handle_add(storage: &Storage, args: AddArgs) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);

    let amount = parse_amount(&args.amount)?;
    let date = args.date.as_deref().map(parse_date).transpose()?;

    let input = CreateExpenseInput {
        description: args.description,
        amount,
        category: args.category,
        date,
    };

    let expense = service.create(input)?;

    println!("Created expense:");
    println!("  ID:          {}", expense.id);
    println!("  Description: {}", expense.description);
    println!("  Amount:      {}", expense.amount);
    println!("  Category:    {}", expense.category);
    println!("  Date:        {}", expense.date);

    Ok(())
}

/// Handle `expense list`
pub fn handle_list(storage: &Storage, settings: &Settings, args: ListArgs) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);

    let view = args.view.resolve(settings);
    let all = service.list_all()?;
    let shown = args.sort.apply(filter_by_view(&all, &view));

    println!("View: {}", view.label());
    print!(
        "{}",
        format_expense_register(&shown, &settings.currency_symbol)
    );

    Ok(())
}

/// Handle `expense show`
pub fn handle_show(storage: &Storage, settings: &Settings, args: ShowArgs) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);

    let expense = service.resolve(&args.id)?;
    print!(
        "{}",
        format_expense_details(&expense, &settings.currency_symbol)
    );

    Ok(())
}

/// Handle `expense edit`
pub fn handle_edit(storage: &Storage, args: EditArgs) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);

    let expense = service.resolve(&args.id)?;

    let input = UpdateExpenseInput {
        description: args.description,
        amount: args.amount.as_deref().map(parse_amount).transpose()?,
        category: args.category,
        date: args.date.as_deref().map(parse_date).transpose()?,
    };

    let updated = service.update(expense.id, input)?;

    println!("Updated expense:");
    println!("  ID:          {}", updated.id);
    println!("  Description: {}", updated.description);
    println!("  Amount:      {}", updated.amount);
    println!("  Category:    {}", updated.category);
    println!("  Date:        {}", updated.date);

    Ok(())
}

/// Handle `expense delete`
pub fn handle_delete(storage: &Storage, args: DeleteArgs) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);

    let expense = service.resolve(&args.id)?;
    let deleted = service.delete(expense.id)?;

    println!("Deleted expense: {} ({})", deleted.description, deleted.id);

    Ok(())
}
