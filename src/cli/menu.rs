//! Interactive numbered menu
//!
//! Runs one session over many user actions. Each numbered choice maps to
//! exactly one [`MenuCommand`]. Input errors are printed and the loop
//! carries on; end of input behaves like choosing Exit.

use std::fs::File;
use std::io::{BufRead, BufWriter, Write};

use crate::alerts::Alert;
use crate::config::Settings;
use crate::display::{format_budget_table, format_transaction_register};
use crate::error::{FinanceError, FinanceResult};
use crate::export::export_report_csv;
use crate::models::{parse_amount, TransactionInput};
use crate::services::Session;
use crate::storage::LedgerStore;

const DEFAULT_EXPORT_PATH: &str = "finance_report.csv";

/// Main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    AddTransaction,
    ViewTransactions,
    GenerateReport,
    ManageBudget,
    ClearTransactions,
    ExportReport,
    Exit,
}

impl MenuCommand {
    pub const ALL: [MenuCommand; 7] = [
        Self::AddTransaction,
        Self::ViewTransactions,
        Self::GenerateReport,
        Self::ManageBudget,
        Self::ClearTransactions,
        Self::ExportReport,
        Self::Exit,
    ];

    /// Parse a numbered choice ("1".."7")
    pub fn from_choice(choice: &str) -> Option<Self> {
        let index: usize = choice.trim().parse().ok()?;
        Self::ALL.get(index.checked_sub(1)?).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AddTransaction => "Add Transaction",
            Self::ViewTransactions => "View Transactions",
            Self::GenerateReport => "Generate Report",
            Self::ManageBudget => "Manage Budget",
            Self::ClearTransactions => "Clear All Transactions",
            Self::ExportReport => "Export Report to CSV",
            Self::Exit => "Exit",
        }
    }
}

/// Budget submenu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetMenuCommand {
    SetBudget,
    ViewBudgets,
    Back,
}

impl BudgetMenuCommand {
    pub const ALL: [BudgetMenuCommand; 3] = [Self::SetBudget, Self::ViewBudgets, Self::Back];

    pub fn from_choice(choice: &str) -> Option<Self> {
        let index: usize = choice.trim().parse().ok()?;
        Self::ALL.get(index.checked_sub(1)?).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SetBudget => "Set Budget",
            Self::ViewBudgets => "View Budgets",
            Self::Back => "Back to Main Menu",
        }
    }
}

/// Whether the menu loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Interactive menu over a session
pub struct Menu<'a, S: LedgerStore, R: BufRead, W: Write> {
    session: &'a mut Session<S>,
    settings: &'a Settings,
    input: R,
    output: W,
}

impl<'a, S: LedgerStore, R: BufRead, W: Write> Menu<'a, S, R, W> {
    pub fn new(session: &'a mut Session<S>, settings: &'a Settings, input: R, output: W) -> Self {
        Self {
            session,
            settings,
            input,
            output,
        }
    }

    /// Run until the user exits or input ends
    ///
    /// Only collaborator failures (storage, output) are returned as errors.
    pub fn run(&mut self) -> FinanceResult<()> {
        loop {
            writeln!(self.output, "\nPersonal Finance Tracker")?;
            for (i, cmd) in MenuCommand::ALL.iter().enumerate() {
                writeln!(self.output, "{}. {}", i + 1, cmd.label())?;
            }

            let Some(choice) = self.prompt("Choose an option: ")? else {
                return self.exit();
            };

            let flow = match MenuCommand::from_choice(&choice) {
                Some(cmd) => self.execute(cmd)?,
                None => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn execute(&mut self, cmd: MenuCommand) -> FinanceResult<Flow> {
        match cmd {
            MenuCommand::AddTransaction => self.add_transaction(),
            MenuCommand::ViewTransactions => {
                let transactions = self.session.transactions()?;
                write!(
                    self.output,
                    "{}",
                    format_transaction_register(
                        &transactions,
                        &self.settings.currency_symbol,
                        &self.settings.date_format
                    )
                )?;
                Ok(Flow::Continue)
            }
            MenuCommand::GenerateReport => {
                let report = self.session.report()?;
                write!(self.output, "{}", report.format_terminal(&self.settings.currency_symbol))?;
                Ok(Flow::Continue)
            }
            MenuCommand::ManageBudget => self.manage_budget(),
            MenuCommand::ClearTransactions => self.clear_transactions(),
            MenuCommand::ExportReport => self.export_report(),
            MenuCommand::Exit => {
                self.exit()?;
                Ok(Flow::Exit)
            }
        }
    }

    fn add_transaction(&mut self) -> FinanceResult<Flow> {
        let Some(amount) = self.prompt("Enter amount: ")? else {
            return Ok(Flow::Exit);
        };
        // Reject a bad amount before asking for the rest
        if let Err(e) = parse_amount(&amount) {
            return self.report_user_error(e);
        }

        let Some(category) = self.prompt("Enter category: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(description) = self.prompt("Enter description: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(kind) = self.prompt("Enter type (income/expense): ")? else {
            return Ok(Flow::Exit);
        };

        let input = TransactionInput::new(amount, category, description, kind);
        match self.session.add_transaction(&input) {
            Ok((txn, alerts)) => {
                writeln!(
                    self.output,
                    "Transaction added successfully! {}",
                    txn.amount().format_with_symbol(&self.settings.currency_symbol)
                )?;
                self.write_alerts(&alerts)?;
                Ok(Flow::Continue)
            }
            Err(e) => self.report_user_error(e),
        }
    }

    fn manage_budget(&mut self) -> FinanceResult<Flow> {
        loop {
            writeln!(self.output, "\nBudget Management")?;
            for (i, cmd) in BudgetMenuCommand::ALL.iter().enumerate() {
                writeln!(self.output, "{}. {}", i + 1, cmd.label())?;
            }

            let Some(choice) = self.prompt("Choose an option: ")? else {
                return Ok(Flow::Exit);
            };

            match BudgetMenuCommand::from_choice(&choice) {
                Some(BudgetMenuCommand::SetBudget) => {
                    let Some(category) = self.prompt("Enter category: ")? else {
                        return Ok(Flow::Exit);
                    };
                    let Some(amount) = self.prompt("Enter budget amount: ")? else {
                        return Ok(Flow::Exit);
                    };
                    match self.session.set_budget(&category, &amount) {
                        Ok(entry) => writeln!(
                            self.output,
                            "Budget for '{}' set to {}",
                            entry.category,
                            entry.limit.format_with_symbol(&self.settings.currency_symbol)
                        )?,
                        Err(e) => {
                            self.report_user_error(e)?;
                        }
                    }
                }
                Some(BudgetMenuCommand::ViewBudgets) => {
                    write!(
                        self.output,
                        "{}",
                        format_budget_table(self.session.budgets(), &self.settings.currency_symbol)
                    )?;
                }
                Some(BudgetMenuCommand::Back) => return Ok(Flow::Continue),
                None => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
    }

    fn clear_transactions(&mut self) -> FinanceResult<Flow> {
        let Some(answer) = self.prompt("Delete ALL transactions? This cannot be undone (yes/no): ")?
        else {
            return Ok(Flow::Exit);
        };

        if matches!(answer.trim().to_lowercase().as_str(), "yes" | "y") {
            self.session.clear_transactions()?;
            writeln!(self.output, "All transactions cleared.")?;
        } else {
            writeln!(self.output, "Nothing was deleted.")?;
        }
        Ok(Flow::Continue)
    }

    fn export_report(&mut self) -> FinanceResult<Flow> {
        let prompt = format!("Enter file path [{}]: ", DEFAULT_EXPORT_PATH);
        let Some(path) = self.prompt(&prompt)? else {
            return Ok(Flow::Exit);
        };
        let path = match path.trim() {
            "" => DEFAULT_EXPORT_PATH.to_string(),
            p => p.to_string(),
        };

        let report = self.session.report()?;
        // A bad path is the user's to fix, so it doesn't end the session
        let result = File::create(&path)
            .map_err(|e| FinanceError::Export(format!("Failed to create {}: {}", path, e)))
            .and_then(|file| export_report_csv(&report, &mut BufWriter::new(file)));

        match result {
            Ok(()) => writeln!(self.output, "Report exported to {}", path)?,
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(Flow::Continue)
    }

    /// Final alert check before leaving
    fn exit(&mut self) -> FinanceResult<()> {
        let alerts = self.session.check_alerts()?;
        self.write_alerts(&alerts)?;
        writeln!(self.output, "Thank you for using Personal Finance Tracker!")?;
        Ok(())
    }

    fn write_alerts(&mut self, alerts: &[Alert]) -> FinanceResult<()> {
        for alert in alerts {
            writeln!(self.output, "{}", alert)?;
        }
        Ok(())
    }

    /// Print an input error and continue; anything else is propagated
    fn report_user_error(&mut self, err: FinanceError) -> FinanceResult<Flow> {
        if !err.is_user_error() {
            return Err(err);
        }
        writeln!(self.output, "Error: {}", err)?;
        Ok(Flow::Continue)
    }

    /// Print a prompt and read one line; `None` at end of input
    fn prompt(&mut self, label: &str) -> FinanceResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}
