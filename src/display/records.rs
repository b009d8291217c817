//! Record table formatting
//!
//! Renders expenses, incomes and budgets as terminal tables.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::{Budget, Expense, Income, Money};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Card")]
    card: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct IncomeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Notes")]
    notes: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Days")]
    days: i64,
    #[tabled(rename = "Limit")]
    limit: String,
}

/// Format expenses as a table with a total line
pub fn format_expense_table(expenses: &[&Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        id: e.id.to_string(),
        date: e.date.format(&settings.date_format).to_string(),
        description: truncate(&e.description, 30),
        category: e.category.clone(),
        card: e.card_name.clone().unwrap_or_default(),
        amount: e.amount.format_with_symbol(&settings.currency_symbol),
    });

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    format!(
        "{}\nTotal: {}\n",
        Table::new(rows).with(Style::rounded()),
        total.format_with_symbol(&settings.currency_symbol)
    )
}

/// Format incomes as a table with a total line
pub fn format_income_table(incomes: &[&Income], settings: &Settings) -> String {
    if incomes.is_empty() {
        return "No incomes found.\n".to_string();
    }

    let rows = incomes.iter().map(|i| IncomeRow {
        id: i.id.to_string(),
        date: i.date.format(&settings.date_format).to_string(),
        source: truncate(&i.source, 30),
        notes: truncate(&i.notes, 30),
        amount: i.amount.format_with_symbol(&settings.currency_symbol),
    });

    let total: Money = incomes.iter().map(|i| i.amount).sum();
    format!(
        "{}\nTotal: {}\n",
        Table::new(rows).with(Style::rounded()),
        total.format_with_symbol(&settings.currency_symbol)
    )
}

/// Format budgets as a table
pub fn format_budget_table(budgets: &[&Budget], settings: &Settings) -> String {
    if budgets.is_empty() {
        return "No budgets found.\n".to_string();
    }

    let rows = budgets.iter().map(|b| BudgetRow {
        id: b.id.to_string(),
        name: truncate(&b.name, 30),
        category: b.category.clone().unwrap_or_default(),
        period: format!(
            "{} - {}",
            b.start.format(&settings.date_format),
            b.end.format(&settings.date_format)
        ),
        days: b.num_days(),
        limit: b.limit.format_with_symbol(&settings.currency_symbol),
    });

    format!("{}\n", Table::new(rows).with(Style::rounded()))
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
