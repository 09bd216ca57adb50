use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use finance_tracker::cli::{
    handle_add_command, handle_budget_command, handle_check_command, handle_clear_command,
    handle_config_command, handle_export_command, handle_list_command, handle_report_command,
    open_session, AddArgs, BudgetCommands, ConfigArgs, Menu,
};
use finance_tracker::config::{FinancePaths, Settings};
use finance_tracker::logging;

#[derive(Parser)]
#[command(
    name = "finance-tracker",
    version,
    about = "Personal finance ledger with budget alerts",
    long_about = "Records income and expense transactions, tracks spending per category \
                  against your budgets, and alerts you when a category goes over. \
                  Run without a command for the interactive menu."
)]
struct Cli {
    /// Log what the tracker is doing to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (default)
    Menu,

    /// Record a transaction
    Add(AddArgs),

    /// List all transactions
    #[command(alias = "ls")]
    List,

    /// Show the summary report
    Report,

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Delete all transactions
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// Export the report to CSV
    Export {
        /// Output file path
        output: PathBuf,
        /// Export raw transactions instead of the summary
        #[arg(long)]
        transactions: bool,
    },

    /// Check every budget and print alerts
    Check,

    /// Show or update configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let paths = FinancePaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    match cli.command {
        None | Some(Commands::Menu) => {
            let mut session = open_session(&paths, &settings)?;
            let stdin = io::stdin();
            Menu::new(&mut session, &settings, stdin.lock(), io::stdout()).run()?;
        }
        Some(Commands::Add(args)) => {
            let mut session = open_session(&paths, &settings)?;
            handle_add_command(&mut session, &settings, args)?;
        }
        Some(Commands::List) => {
            handle_list_command(&open_session(&paths, &settings)?, &settings)?;
        }
        Some(Commands::Report) => {
            handle_report_command(&open_session(&paths, &settings)?, &settings)?;
        }
        Some(Commands::Budget(cmd)) => {
            let mut session = open_session(&paths, &settings)?;
            handle_budget_command(&mut session, &settings, cmd)?;
        }
        Some(Commands::Clear { yes }) => {
            let mut session = open_session(&paths, &settings)?;
            handle_clear_command(&mut session, yes)?;
        }
        Some(Commands::Export {
            output,
            transactions,
        }) => {
            let session = open_session(&paths, &settings)?;
            handle_export_command(&session, &output, transactions)?;
        }
        Some(Commands::Check) => {
            let mut session = open_session(&paths, &settings)?;
            handle_check_command(&mut session)?;
        }
        Some(Commands::Config(args)) => {
            handle_config_command(&paths, &mut settings, args)?;
        }
    }

    Ok(())
}
