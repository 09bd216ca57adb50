//! Budget alert evaluation
//!
//! The engine compares per-category expense totals against the budget table
//! and reports each breach once per session. The session owns the
//! [`AlertState`] and passes it in on every evaluation.

pub mod engine;
pub mod state;

pub use engine::{spending_by_category, Alert, AlertEngine, AlertLevel};
pub use state::AlertState;
