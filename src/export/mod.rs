//! Export module for the finance tracker
//!
//! CSV export of the summary report and of the raw transaction history.

pub mod csv;

pub use self::csv::{export_report_csv, export_transactions_csv};
