//! Core data models for the finance tracker
//!
//! Transactions, the budget table and the money type they share.

pub mod budget;
pub mod ids;
pub mod money;
pub mod transaction;

pub use budget::{BudgetEntry, BudgetTable};
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::{parse_amount, Transaction, TransactionInput, TransactionKind};
