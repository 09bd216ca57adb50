//! Transaction model
//!
//! A transaction is an immutable fact: once constructed its fields can only be
//! read. Records are appended to the store or the whole store is cleared;
//! nothing is ever edited in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;
use crate::error::{FinanceError, FinanceResult};

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Lowercase name, as stored and accepted on input
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = FinanceError;

    /// Case-insensitive; surrounding whitespace is ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(FinanceError::InvalidTransaction(
                "Transaction type must be 'income' or 'expense'".into(),
            )),
        }
    }
}

/// Parse a user-supplied amount, which must be a positive decimal number
pub fn parse_amount(input: &str) -> FinanceResult<Money> {
    let amount = Money::parse(input).map_err(|e| FinanceError::InvalidAmount(e.to_string()))?;
    if !amount.is_positive() {
        return Err(FinanceError::InvalidAmount(
            "Amount must be positive".into(),
        ));
    }
    Ok(amount)
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    amount: Money,
    category: String,
    description: String,
    kind: TransactionKind,
    created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction stamped with the current time
    ///
    /// Category and description are trimmed and must not be empty; the amount
    /// must be positive.
    pub fn new(
        amount: Money,
        category: impl AsRef<str>,
        description: impl AsRef<str>,
        kind: TransactionKind,
    ) -> FinanceResult<Self> {
        if !amount.is_positive() {
            return Err(FinanceError::InvalidAmount(
                "Amount must be positive".into(),
            ));
        }

        let category = category.as_ref().trim();
        let description = description.as_ref().trim();
        if category.is_empty() || description.is_empty() {
            return Err(FinanceError::InvalidTransaction(
                "Category and description cannot be empty".into(),
            ));
        }

        Ok(Self {
            id: TransactionId::new(),
            amount,
            category: category.to_string(),
            description: description.to_string(),
            kind,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_expense(&self) -> bool {
        self.kind.is_expense()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.created_at.format("%Y-%m-%d"),
            self.kind,
            self.amount,
            self.category,
            self.description
        )
    }
}

/// Raw, unvalidated transaction fields as typed by the user
#[derive(Debug, Clone, Default)]
pub struct TransactionInput {
    pub amount: String,
    pub category: String,
    pub description: String,
    pub kind: String,
}

impl TransactionInput {
    pub fn new(
        amount: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            category: category.into(),
            description: description.into(),
            kind: kind.into(),
        }
    }

    /// Validate the raw fields and build a transaction
    ///
    /// The amount is checked first, then category/description, then kind.
    pub fn validate(&self) -> FinanceResult<Transaction> {
        let amount = parse_amount(&self.amount)?;

        if self.category.trim().is_empty() || self.description.trim().is_empty() {
            return Err(FinanceError::InvalidTransaction(
                "Category and description cannot be empty".into(),
            ));
        }

        let kind: TransactionKind = self.kind.parse()?;
        Transaction::new(amount, &self.category, &self.description, kind)
    }
}
