//! Budget repository for JSON storage
//!
//! Persists the budget table to budgets.json as a flat `{category: cents}` map.

use std::path::PathBuf;

use crate::error::FinanceError;
use crate::models::BudgetTable;

use super::file_io::{read_json, write_json_atomic};

/// Repository for budget table persistence
pub struct BudgetRepository {
    path: PathBuf,
}

impl BudgetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the budget table, rejecting files with non-positive limits
    pub fn load(&self) -> Result<BudgetTable, FinanceError> {
        let table: BudgetTable = read_json(&self.path)?;
        table.validate().map_err(|e| {
            FinanceError::Storage(format!("{}: {}", self.path.display(), e))
        })?;
        Ok(table)
    }

    pub fn save(&self, table: &BudgetTable) -> Result<(), FinanceError> {
        write_json_atomic(&self.path, table)
    }
}
