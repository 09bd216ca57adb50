//! CSV Export functionality
//!
//! Amounts are written as plain numbers with two decimals and no currency
//! symbol so spreadsheets can read them directly.

use std::io::Write;

use crate::error::FinanceResult;
use crate::models::Transaction;
use crate::reports::SummaryReport;

/// Export the per-category summary followed by a TOTAL row
pub fn export_report_csv<W: Write>(report: &SummaryReport, writer: &mut W) -> FinanceResult<()> {
    let mut csv = ::csv::Writer::from_writer(writer);

    csv.write_record(["Category", "Income", "Expenses", "Budget", "Remaining", "Over Budget"])?;

    for row in &report.categories {
        csv.write_record([
            row.category.clone(),
            row.income.to_string(),
            row.expense.to_string(),
            row.limit.map(|l| l.to_string()).unwrap_or_default(),
            row.remaining().map(|r| r.to_string()).unwrap_or_default(),
            row.is_over_budget().to_string(),
        ])?;
    }

    csv.write_record([
        "TOTAL".to_string(),
        report.total_income.to_string(),
        report.total_expense.to_string(),
        String::new(),
        report.net_balance().to_string(),
        String::new(),
    ])?;

    csv.flush()?;
    Ok(())
}

/// Export every transaction in insertion order
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
) -> FinanceResult<()> {
    let mut csv = ::csv::Writer::from_writer(writer);

    csv.write_record(["ID", "Timestamp", "Type", "Category", "Description", "Amount"])?;

    for txn in transactions {
        csv.write_record([
            txn.id().as_uuid().to_string(),
            txn.created_at().to_rfc3339(),
            txn.kind().as_str().to_string(),
            txn.category().to_string(),
            txn.description().to_string(),
            txn.amount().to_string(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}
