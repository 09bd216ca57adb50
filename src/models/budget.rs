//! Budget table model
//!
//! Maps a category name to its spending limit. Categories without an entry
//! are never checked for alerts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::money::Money;
use crate::error::{FinanceError, FinanceResult};

/// A single category limit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetEntry {
    pub category: String,
    pub limit: Money,
}

impl fmt::Display for BudgetEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.limit)
    }
}

/// Category -> limit mapping
///
/// Iteration is ordered by category name. Every stored limit is positive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BudgetTable {
    limits: BTreeMap<String, Money>,
}

impl BudgetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or override the limit for a category
    ///
    /// Fails with [`FinanceError::InvalidBudget`] and leaves the table
    /// untouched if the category is blank or the limit is not positive.
    pub fn set_budget(&mut self, category: &str, limit: Money) -> FinanceResult<()> {
        let category = category.trim();
        if category.is_empty() {
            return Err(FinanceError::InvalidBudget(
                "Category cannot be empty".into(),
            ));
        }
        if !limit.is_positive() {
            return Err(FinanceError::InvalidBudget(format!(
                "Budget for '{}' must be positive, got {}",
                category, limit
            )));
        }

        self.limits.insert(category.to_string(), limit);
        Ok(())
    }

    /// The limit for a category, if one has been set
    pub fn get_limit(&self, category: &str) -> Option<Money> {
        self.limits.get(category).copied()
    }

    pub fn list_budgets(&self) -> Vec<BudgetEntry> {
        self.iter()
            .map(|(category, limit)| BudgetEntry {
                category: category.to_string(),
                limit,
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> + '_ {
        self.limits.iter().map(|(c, l)| (c.as_str(), *l))
    }

    pub fn len(&self) -> usize {
        self.limits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }

    /// Check that every stored limit is positive (used after loading from disk)
    pub fn validate(&self) -> FinanceResult<()> {
        for (category, limit) in self.iter() {
            if category.trim().is_empty() || !limit.is_positive() {
                return Err(FinanceError::InvalidBudget(format!(
                    "Stored budget for '{}' is invalid ({})",
                    category, limit
                )));
            }
        }
        Ok(())
    }
}
