//! Transaction display formatting

use std::fmt::Write;

use crate::models::Transaction;

/// Format a single transaction as one line
///
/// `date_format` is a strftime pattern applied to the creation timestamp.
/// A pattern chrono cannot render falls back to RFC 3339.
pub fn format_transaction_row(txn: &Transaction, currency_symbol: &str, date_format: &str) -> String {
    let mut timestamp = String::new();
    if write!(timestamp, "{}", txn.created_at().format(date_format)).is_err() {
        timestamp = txn.created_at().to_rfc3339();
    }

    format!(
        "{}: {} - {} - {} - {}",
        timestamp,
        txn.kind(),
        txn.amount().format_with_symbol(currency_symbol),
        txn.category(),
        txn.description()
    )
}

/// Format the whole history, oldest first
pub fn format_transaction_register(
    transactions: &[Transaction],
    currency_symbol: &str,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    for txn in transactions {
        output.push_str(&format_transaction_row(txn, currency_symbol, date_format));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};

    #[test]
    fn test_format_row() {
        let txn = Transaction::new(
            Money::from_cents(4050),
            "food",
            "groceries",
            TransactionKind::Expense,
        )
        .unwrap();

        let row = format_transaction_row(&txn, "€", "%Y");
        let year = txn.created_at().format("%Y").to_string();
        assert_eq!(row, format!("{}: Expense - €40.50 - food - groceries", year));
    }

    #[test]
    fn test_unrenderable_date_format_falls_back() {
        let txn = Transaction::new(
            Money::from_cents(100),
            "food",
            "tea",
            TransactionKind::Expense,
        )
        .unwrap();

        let register = format_transaction_register(&[txn.clone()], "$", "%Q");
        assert_eq!(
            register,
            format!("{}: Expense - $1.00 - food - tea\n", txn.created_at().to_rfc3339())
        );
    }

    #[test]
    fn test_empty_register() {
        assert_eq!(
            format_transaction_register(&[], "$", "%Y-%m-%d"),
            "No transactions found.\n"
        );
    }
}
