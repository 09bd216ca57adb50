//! Budget CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_budget_table;
use crate::error::FinanceResult;
use crate::services::Session;
use crate::storage::LedgerStore;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set or override the spending limit for a category
    Set {
        /// Category name (case-sensitive)
        category: String,
        /// Limit (e.g., "100" or "100.00")
        amount: String,
    },

    /// List all category budgets
    List,
}

/// Handle a budget command
pub fn handle_budget_command<S: LedgerStore>(
    session: &mut Session<S>,
    settings: &Settings,
    cmd: BudgetCommands,
) -> FinanceResult<()> {
    match cmd {
        BudgetCommands::Set { category, amount } => {
            let entry = session.set_budget(&category, &amount)?;
            println!(
                "Budget for '{}' set to {}",
                entry.category,
                entry.limit.format_with_symbol(&settings.currency_symbol)
            );
        }
        BudgetCommands::List => {
            print!(
                "{}",
                format_budget_table(session.budgets(), &settings.currency_symbol)
            );
        }
    }
    Ok(())
}
