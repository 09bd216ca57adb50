//! Report, export and alert-check commands

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::config::Settings;
use crate::error::{FinanceError, FinanceResult};
use crate::export::{export_report_csv, export_transactions_csv};
use crate::services::Session;
use crate::storage::LedgerStore;

use super::print_alerts;

pub fn handle_report_command<S: LedgerStore>(
    session: &Session<S>,
    settings: &Settings,
) -> FinanceResult<()> {
    let report = session.report()?;
    print!("{}", report.format_terminal(&settings.currency_symbol));
    Ok(())
}

/// Write the summary report (or the raw transactions) to a CSV file
pub fn handle_export_command<S: LedgerStore>(
    session: &Session<S>,
    output: &Path,
    transactions: bool,
) -> FinanceResult<()> {
    let file = File::create(output).map_err(|e| {
        FinanceError::Export(format!("Failed to create {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    if transactions {
        export_transactions_csv(&session.transactions()?, &mut writer)?;
        println!("Transactions exported to {}", output.display());
    } else {
        export_report_csv(&session.report()?, &mut writer)?;
        println!("Report exported to {}", output.display());
    }
    Ok(())
}

/// Evaluate every budget and print what is over
pub fn handle_check_command<S: LedgerStore>(session: &mut Session<S>) -> FinanceResult<()> {
    let alerts = session.check_alerts()?;
    if alerts.is_empty() {
        println!("All categories are within budget.");
    } else {
        print_alerts(&alerts);
    }
    Ok(())
}
