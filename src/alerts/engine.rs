//! Alert engine
//!
//! Re-scans the full transaction history on every call. Only expenses count
//! toward a category's spending; income is ignored. A category is reported
//! when its total is strictly greater than its limit, once per session, and is
//! re-armed when the total drops back to the limit or below.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, info};

use super::state::AlertState;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{BudgetTable, Money, Transaction};

/// Severity of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    /// Spending has reached the configured warning percentage of the limit
    Warning,
    /// Spending is strictly above the limit
    Exceeded,
}

/// A single budget alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub category: String,
    pub spent: Money,
    pub limit: Money,
    pub level: AlertLevel,
}

impl Alert {
    /// Whole percentage of the limit already spent
    pub fn percent_used(&self) -> i64 {
        percent_of(self.spent, self.limit)
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            AlertLevel::Exceeded => write!(
                f,
                "ALERT: {} spending ({}) exceeds budget ({})",
                self.category, self.spent, self.limit
            ),
            AlertLevel::Warning => write!(
                f,
                "WARNING: {} spending ({}) is at {}% of budget ({})",
                self.category,
                self.spent,
                self.percent_used(),
                self.limit
            ),
        }
    }
}

fn percent_of(spent: Money, limit: Money) -> i64 {
    if !limit.is_positive() {
        return 0;
    }
    (i128::from(spent.cents()) * 100 / i128::from(limit.cents())) as i64
}

/// Sum expense amounts per category, ignoring income
pub fn spending_by_category(transactions: &[Transaction]) -> HashMap<&str, Money> {
    let mut spent: HashMap<&str, Money> = HashMap::new();
    for txn in transactions.iter().filter(|t| t.is_expense()) {
        *spent.entry(txn.category()).or_default() += txn.amount();
    }
    spent
}

/// Evaluates spending against budgets
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertEngine {
    warning_threshold: Option<u8>,
}

impl AlertEngine {
    /// Engine that only reports budgets that have been exceeded
    pub fn new() -> Self {
        Self::default()
    }

    /// Also warn once a category reaches `percent` of its limit (1-99)
    pub fn with_warning_threshold(percent: u8) -> FinanceResult<Self> {
        if !(1..=99).contains(&percent) {
            return Err(FinanceError::Config(format!(
                "Warning threshold must be between 1 and 99 percent, got {}",
                percent
            )));
        }
        Ok(Self {
            warning_threshold: Some(percent),
        })
    }

    pub fn warning_threshold(&self) -> Option<u8> {
        self.warning_threshold
    }

    /// Compare spending with the budget table and return new alerts
    ///
    /// Alerts come out in budget table order. `state` is updated in place:
    /// newly reported categories are marked, and categories back within
    /// their limit are cleared so a later breach is reported again.
    pub fn evaluate(
        &self,
        transactions: &[Transaction],
        budgets: &BudgetTable,
        state: &mut AlertState,
    ) -> Vec<Alert> {
        let spent_by_category = spending_by_category(transactions);
        let mut alerts = Vec::new();

        for (category, limit) in budgets.iter() {
            let spent = spent_by_category
                .get(category)
                .copied()
                .unwrap_or_default();

            if spent > limit {
                if !state.is_exceeded(category) {
                    info!(category, %spent, %limit, "budget exceeded");
                    state.mark_exceeded(category);
                    alerts.push(Alert {
                        category: category.to_string(),
                        spent,
                        limit,
                        level: AlertLevel::Exceeded,
                    });
                }
                continue;
            }

            if state.clear_exceeded(category) {
                debug!(category, %spent, %limit, "spending back within budget, alert re-armed");
            }

            if let Some(threshold) = self.warning_threshold {
                let reached = spent.is_positive() && percent_of(spent, limit) >= i64::from(threshold);
                if !reached {
                    state.clear_warned(category);
                } else if !state.is_warned(category) {
                    info!(category, %spent, %limit, threshold, "budget warning threshold reached");
                    state.mark_warned(category);
                    alerts.push(Alert {
                        category: category.to_string(),
                        spent,
                        limit,
                        level: AlertLevel::Warning,
                    });
                }
            }
        }

        alerts
    }
}
