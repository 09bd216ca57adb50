//! Reports module for the finance tracker
//!
//! Summarizes the ledger by category against the budget table.

pub mod summary;

pub use summary::{CategorySummary, SummaryReport};
