//! Storage layer for the finance tracker
//!
//! [`LedgerStore`] is the boundary the session talks to. [`Storage`] keeps
//! the ledger in JSON files with atomic writes; [`MemoryStore`] keeps it in
//! memory for tests and throwaway sessions.

pub mod budgets;
pub mod file_io;
pub mod memory;
pub mod transactions;

pub use budgets::BudgetRepository;
pub use file_io::{read_json, write_json_atomic};
pub use memory::MemoryStore;
pub use transactions::TransactionRepository;

use crate::config::paths::FinancePaths;
use crate::error::FinanceError;
use crate::models::{BudgetTable, Transaction};

/// Supplies and records the ledger
pub trait LedgerStore {
    /// Append a transaction at the end of the history
    fn append_transaction(&mut self, txn: Transaction) -> Result<(), FinanceError>;

    /// All transactions in insertion order
    fn get_all_transactions(&self) -> Result<Vec<Transaction>, FinanceError>;

    /// Remove all transactions. Irreversible.
    fn clear_transactions(&mut self) -> Result<(), FinanceError>;

    fn load_budgets(&self) -> Result<BudgetTable, FinanceError>;

    fn save_budgets(&mut self, budgets: &BudgetTable) -> Result<(), FinanceError>;
}

/// JSON file storage coordinator
pub struct Storage {
    paths: FinancePaths,
    pub transactions: TransactionRepository,
    pub budgets: BudgetRepository,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: FinancePaths) -> Result<Self, FinanceError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            paths,
        })
    }

    /// Create storage and load existing transactions from disk
    pub fn open(paths: FinancePaths) -> Result<Self, FinanceError> {
        let mut storage = Self::new(paths)?;
        storage.transactions.load()?;
        Ok(storage)
    }

    pub fn paths(&self) -> &FinancePaths {
        &self.paths
    }
}

impl LedgerStore for Storage {
    fn append_transaction(&mut self, txn: Transaction) -> Result<(), FinanceError> {
        self.transactions.append(txn)
    }

    fn get_all_transactions(&self) -> Result<Vec<Transaction>, FinanceError> {
        Ok(self.transactions.get_all().to_vec())
    }

    fn clear_transactions(&mut self) -> Result<(), FinanceError> {
        self.transactions.clear()
    }

    fn load_budgets(&self) -> Result<BudgetTable, FinanceError> {
        self.budgets.load()
    }

    fn save_budgets(&mut self, budgets: &BudgetTable) -> Result<(), FinanceError> {
        self.budgets.save(budgets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(storage.get_all_transactions().unwrap().is_empty());
    }

    #[test]
    fn test_open_reloads_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path());

        {
            let mut storage = Storage::open(paths.clone()).unwrap();
            let txn = Transaction::new(
                Money::from_cents(4000),
                "food",
                "lunch",
                TransactionKind::Expense,
            )
            .unwrap();
            storage.append_transaction(txn).unwrap();

            let mut table = BudgetTable::new();
            table.set_budget("food", Money::from_cents(10000)).unwrap();
            storage.save_budgets(&table).unwrap();
        }

        let storage = Storage::open(paths).unwrap();
        let all = storage.get_all_transactions().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].category(), "food");
        assert_eq!(
            storage.load_budgets().unwrap().get_limit("food"),
            Some(Money::from_cents(10000))
        );
    }
}
