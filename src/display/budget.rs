//! Budget table display formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::BudgetTable;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Limit")]
    limit: String,
}

/// Render the budget table, one row per category
pub fn format_budget_table(budgets: &BudgetTable, currency_symbol: &str) -> String {
    if budgets.is_empty() {
        return "No budgets set.\n".to_string();
    }

    let rows = budgets.list_budgets().into_iter().map(|entry| BudgetRow {
        category: entry.category,
        limit: entry.limit.format_with_symbol(currency_symbol),
    });

    let mut output = Table::new(rows)
        .with(Style::rounded())
        .modify(Columns::single(1), Alignment::right())
        .to_string();
    output.push('\n');
    output
}
