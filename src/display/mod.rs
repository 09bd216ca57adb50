//! Display formatting utilities
//!
//! Provides terminal formatting for transactions and budgets. Amounts are
//! rendered with the configured currency symbol.

pub mod budget;
pub mod transaction;

pub use budget::format_budget_table;
pub use transaction::{format_transaction_register, format_transaction_row};
