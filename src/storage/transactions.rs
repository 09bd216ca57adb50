//! Transaction repository for JSON storage
//!
//! Append-only: records are added at the end and kept in insertion order.
//! The only other mutation is clearing the whole file.

use std::path::PathBuf;

use tracing::debug;

use crate::error::FinanceError;
use crate::models::Transaction;

use super::file_io::{read_json, write_json_atomic};

/// Serializable transaction data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    data: Vec<Transaction>,
}

impl TransactionRepository {
    /// Create a new, empty transaction repository backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: Vec::new(),
        }
    }

    /// Load transactions from disk
    pub fn load(&mut self) -> Result<(), FinanceError> {
        let file_data: TransactionData = read_json(&self.path)?;
        debug!(count = file_data.transactions.len(), path = %self.path.display(), "loaded transactions");
        self.data = file_data.transactions;
        Ok(())
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), FinanceError> {
        #[derive(serde::Serialize)]
        struct TransactionDataRef<'a> {
            transactions: &'a [Transaction],
        }

        write_json_atomic(
            &self.path,
            &TransactionDataRef {
                transactions: &self.data,
            },
        )
    }

    /// Append a transaction and persist it
    ///
    /// If the write fails the in-memory list is rolled back.
    pub fn append(&mut self, txn: Transaction) -> Result<(), FinanceError> {
        self.data.push(txn);
        if let Err(e) = self.save() {
            self.data.pop();
            return Err(e);
        }
        Ok(())
    }

    /// All transactions in insertion order
    pub fn get_all(&self) -> &[Transaction] {
        &self.data
    }

    /// Remove every transaction, on disk and in memory
    pub fn clear(&mut self) -> Result<(), FinanceError> {
        let previous = std::mem::take(&mut self.data);
        if let Err(e) = self.save() {
            self.data = previous;
            return Err(e);
        }
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.data.len()
    }
}
