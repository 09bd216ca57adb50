//! Summary Report
//!
//! Income, expenses and budget headroom per category over the whole ledger.

use std::collections::BTreeMap;

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::{BudgetTable, Money, Transaction, TransactionKind};

/// Totals for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: String,
    pub income: Money,
    pub expense: Money,
    pub transaction_count: usize,
    /// Budget limit, if the category has one
    pub limit: Option<Money>,
}

impl CategorySummary {
    fn new(category: &str) -> Self {
        Self {
            category: category.to_string(),
            income: Money::zero(),
            expense: Money::zero(),
            transaction_count: 0,
            limit: None,
        }
    }

    /// Limit minus expenses; negative when over budget
    pub fn remaining(&self) -> Option<Money> {
        self.limit.map(|limit| limit - self.expense)
    }

    /// Strictly above the limit, same rule as the alert engine
    pub fn is_over_budget(&self) -> bool {
        self.limit.is_some_and(|limit| self.expense > limit)
    }
}

/// Whole-ledger summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryReport {
    /// One row per category that has transactions or a budget, sorted by name
    pub categories: Vec<CategorySummary>,
    pub total_income: Money,
    pub total_expense: Money,
    pub transaction_count: usize,
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expenses")]
    expense: String,
    #[tabled(rename = "Budget")]
    limit: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "")]
    status: &'static str,
}

impl SummaryReport {
    /// Build the report from the full history and the budget table
    pub fn generate(transactions: &[Transaction], budgets: &BudgetTable) -> Self {
        let mut by_category: BTreeMap<&str, CategorySummary> = BTreeMap::new();
        let mut total_income = Money::zero();
        let mut total_expense = Money::zero();

        for txn in transactions {
            let entry = by_category
                .entry(txn.category())
                .or_insert_with(|| CategorySummary::new(txn.category()));
            entry.transaction_count += 1;

            match txn.kind() {
                TransactionKind::Income => {
                    entry.income += txn.amount();
                    total_income += txn.amount();
                }
                TransactionKind::Expense => {
                    entry.expense += txn.amount();
                    total_expense += txn.amount();
                }
            }
        }

        for (category, limit) in budgets.iter() {
            by_category
                .entry(category)
                .or_insert_with(|| CategorySummary::new(category))
                .limit = Some(limit);
        }

        Self {
            categories: by_category.into_values().collect(),
            total_income,
            total_expense,
            transaction_count: transactions.len(),
        }
    }

    /// Income minus expenses
    pub fn net_balance(&self) -> Money {
        self.total_income - self.total_expense
    }

    pub fn over_budget(&self) -> impl Iterator<Item = &CategorySummary> {
        self.categories.iter().filter(|c| c.is_over_budget())
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let fmt = |m: Money| m.format_with_symbol(currency_symbol);

        let mut output = String::new();
        output.push_str("Financial Report\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!("Total Income:   {}\n", fmt(self.total_income)));
        output.push_str(&format!("Total Expenses: {}\n", fmt(self.total_expense)));
        output.push_str(&format!("Net Balance:    {}\n", fmt(self.net_balance())));
        output.push_str(&format!("Transactions:   {}\n", self.transaction_count));

        if self.categories.is_empty() {
            output.push_str("\nNo categories to report.\n");
            return output;
        }

        let rows = self.categories.iter().map(|c| SummaryRow {
            category: c.category.clone(),
            income: fmt(c.income),
            expense: fmt(c.expense),
            limit: c.limit.map(fmt).unwrap_or_else(|| "-".into()),
            remaining: c.remaining().map(fmt).unwrap_or_else(|| "-".into()),
            status: if c.is_over_budget() { "OVER" } else { "" },
        });

        let table = Table::new(rows)
            .with(Style::rounded())
            .modify(Columns::new(1..5), Alignment::right())
            .to_string();

        output.push('\n');
        output.push_str(&table);
        output.push('\n');

        let over: Vec<&str> = self.over_budget().map(|c| c.category.as_str()).collect();
        if !over.is_empty() {
            output.push_str(&format!("\nOver budget: {}\n", over.join(", ")));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(kind: TransactionKind, category: &str, cents: i64) -> Transaction {
        Transaction::new(Money::from_cents(cents), category, "test", kind).unwrap()
    }

    fn sample() -> SummaryReport {
        let history = vec![
            txn(TransactionKind::Income, "salary", 300000),
            txn(TransactionKind::Expense, "food", 4000),
            txn(TransactionKind::Expense, "food", 7000),
            txn(TransactionKind::Expense, "transport", 2500),
        ];
        let mut budgets = BudgetTable::new();
        budgets.set_budget("food", Money::from_cents(10000)).unwrap();
        budgets.set_budget("rent", Money::from_cents(90000)).unwrap();
        SummaryReport::generate(&history, &budgets)
    }

    #[test]
    fn test_totals() {
        let report = sample();
        assert_eq!(report.total_income.cents(), 300000);
        assert_eq!(report.total_expense.cents(), 13500);
        assert_eq!(report.net_balance().cents(), 286500);
        assert_eq!(report.transaction_count, 4);
    }

    #[test]
    fn test_category_rows() {
        let report = sample();
        let names: Vec<_> = report.categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["food", "rent", "salary", "transport"]);

        let food = &report.categories[0];
        assert_eq!(food.expense.cents(), 11000);
        assert_eq!(food.transaction_count, 2);
        assert_eq!(food.remaining(), Some(Money::from_cents(-1000)));
        assert!(food.is_over_budget());

        let rent = &report.categories[1];
        assert_eq!(rent.transaction_count, 0);
        assert!(!rent.is_over_budget());

        let transport = &report.categories[3];
        assert_eq!(transport.limit, None);
        assert!(!transport.is_over_budget());

        let over: Vec<_> = report.over_budget().map(|c| c.category.as_str()).collect();
        assert_eq!(over, vec!["food"]);
    }

    #[test]
    fn test_format_terminal() {
        let output = sample().format_terminal("$");
        assert!(output.contains("Total Income:   $3000.00"));
        assert!(output.contains("Net Balance:    $2865.00"));
        assert!(output.contains("food"));
        assert!(output.contains("-$10.00"));
        assert!(output.contains("OVER"));
        assert!(output.ends_with("\nOver budget: food\n"));
    }

    #[test]
    fn test_empty_report() {
        let report = SummaryReport::generate(&[], &BudgetTable::new());
        assert_eq!(report.net_balance(), Money::zero());
        assert!(report.format_terminal("$").contains("No categories to report."));
    }
}
