//! Custom error types for the finance tracker
//!
//! The first three variants are expected input errors: the front ends print
//! them and keep the session going. Everything else comes from a collaborator
//! (disk, config, notification channel) and ends the process cleanly.

use thiserror::Error;

/// The main error type for finance tracker operations
#[derive(Error, Debug)]
pub enum FinanceError {
    /// Non-numeric or non-positive amount
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Empty category/description or unrecognized transaction kind
    #[error("Invalid transaction: {0}")]
    InvalidTransaction(String),

    /// Non-positive budget limit or empty category
    #[error("Invalid budget: {0}")]
    InvalidBudget(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Notification delivery errors
    #[error("Notification error: {0}")]
    Notify(String),
}

impl FinanceError {
    /// Check if this is an input error the user can correct and retry
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_) | Self::InvalidTransaction(_) | Self::InvalidBudget(_)
        )
    }
}

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for FinanceError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for finance tracker operations
pub type FinanceResult<T> = Result<T, FinanceError>;
