//! Transaction CLI commands
//!
//! Add, list and clear transactions from the command line.

use clap::Args;

use crate::config::Settings;
use crate::display::format_transaction_register;
use crate::error::FinanceResult;
use crate::models::TransactionInput;
use crate::services::Session;
use crate::storage::LedgerStore;

use super::print_alerts;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount (e.g., "40" or "40.50")
    pub amount: String,
    /// Category name (case-sensitive)
    pub category: String,
    /// Description
    pub description: String,
    /// Transaction type: income or expense
    #[arg(short, long, default_value = "expense")]
    pub kind: String,
}

/// Record one transaction and print any alerts it triggers
pub fn handle_add_command<S: LedgerStore>(
    session: &mut Session<S>,
    settings: &Settings,
    args: AddArgs,
) -> FinanceResult<()> {
    let input = TransactionInput::new(args.amount, args.category, args.description, args.kind);
    let (txn, alerts) = session.add_transaction(&input)?;

    println!(
        "Transaction added successfully! {}",
        txn.amount().format_with_symbol(&settings.currency_symbol)
    );
    print_alerts(&alerts);
    Ok(())
}

pub fn handle_list_command<S: LedgerStore>(
    session: &Session<S>,
    settings: &Settings,
) -> FinanceResult<()> {
    let transactions = session.transactions()?;
    print!(
        "{}",
        format_transaction_register(&transactions, &settings.currency_symbol, &settings.date_format)
    );
    Ok(())
}

/// Clear the ledger; refuses unless `confirmed`
pub fn handle_clear_command<S: LedgerStore>(
    session: &mut Session<S>,
    confirmed: bool,
) -> FinanceResult<()> {
    if !confirmed {
        println!("This deletes every transaction and cannot be undone.");
        println!("Re-run with --yes to confirm.");
        return Ok(());
    }

    let count = session.transactions()?.len();
    session.clear_transactions()?;
    println!("Cleared {} transaction(s).", count);
    Ok(())
}
