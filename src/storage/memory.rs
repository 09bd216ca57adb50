//! In-memory ledger store

use crate::error::FinanceError;
use crate::models::{BudgetTable, Transaction};

use super::LedgerStore;

/// Keeps the ledger in memory; nothing survives the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    transactions: Vec<Transaction>,
    budgets: BudgetTable,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing budget table
    pub fn with_budgets(budgets: BudgetTable) -> Self {
        Self {
            transactions: Vec::new(),
            budgets,
        }
    }
}

impl LedgerStore for MemoryStore {
    fn append_transaction(&mut self, txn: Transaction) -> Result<(), FinanceError> {
        self.transactions.push(txn);
        Ok(())
    }

    fn get_all_transactions(&self) -> Result<Vec<Transaction>, FinanceError> {
        Ok(self.transactions.clone())
    }

    fn clear_transactions(&mut self) -> Result<(), FinanceError> {
        self.transactions.clear();
        Ok(())
    }

    fn load_budgets(&self) -> Result<BudgetTable, FinanceError> {
        Ok(self.budgets.clone())
    }

    fn save_budgets(&mut self, budgets: &BudgetTable) -> Result<(), FinanceError> {
        self.budgets = budgets.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};

    #[test]
    fn test_append_and_clear() {
        let mut store = MemoryStore::new();
        for cents in [100, 200] {
            let txn = Transaction::new(
                Money::from_cents(cents),
                "food",
                "x",
                TransactionKind::Expense,
            )
            .unwrap();
            store.append_transaction(txn).unwrap();
        }

        let amounts: Vec<_> = store
            .get_all_transactions()
            .unwrap()
            .iter()
            .map(|t| t.amount().cents())
            .collect();
        assert_eq!(amounts, vec![100, 200]);

        store.clear_transactions().unwrap();
        assert!(store.get_all_transactions().unwrap().is_empty());
    }
}
