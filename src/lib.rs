//! Finance Tracker - terminal personal finance ledger with budget alerts
//!
//! Records income and expense transactions, totals expenses per category
//! against user-defined budgets, and raises an alert the first time a
//! category goes over its limit in a session.
//!
//! # Architecture
//!
//! - `models`: transactions, the budget table and money
//! - `alerts`: the alert engine and its per-session state
//! - `services`: the session that ties store, budgets, alerts and notifier together
//! - `storage`: the ledger store boundary and its JSON and in-memory backends
//! - `notify`: alert delivery channels
//! - `reports`, `display`, `export`: presentation and CSV output
//! - `config`, `logging`, `error`: ambient concerns
//! - `cli`: clap command handlers and the interactive menu
//!
//! # Example
//!
//! ```rust
//! use finance_tracker::alerts::AlertEngine;
//! use finance_tracker::models::TransactionInput;
//! use finance_tracker::notify::NullNotifier;
//! use finance_tracker::services::Session;
//! use finance_tracker::storage::MemoryStore;
//!
//! let mut session =
//!     Session::open(MemoryStore::new(), AlertEngine::new(), Box::new(NullNotifier)).unwrap();
//! session.set_budget("food", "100").unwrap();
//! session.add_transaction(&TransactionInput::new("40", "food", "groceries", "expense")).unwrap();
//! let (_, alerts) = session
//!     .add_transaction(&TransactionInput::new("70", "food", "dinner", "expense"))
//!     .unwrap();
//! assert_eq!(alerts[0].to_string(), "ALERT: food spending (110.00) exceeds budget (100.00)");
//! ```

pub mod alerts;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod notify;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FinanceError, FinanceResult};
