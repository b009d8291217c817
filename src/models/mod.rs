//! Core data models for Pocketbook
//!
//! Expenses, incomes and budgets, plus the `Money` amount type and typed ids.

pub mod budget;
pub mod expense;
pub mod ids;
pub mod income;
pub mod money;

pub use budget::Budget;
pub use expense::Expense;
pub use ids::{BudgetId, ExpenseId, IncomeId};
pub use income::Income;
pub use money::Money;

/// The kinds of record Pocketbook stores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Expense,
    Income,
    Budget,
}

impl RecordKind {
    /// Singular lower-case label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
            Self::Budget => "budget",
        }
    }

    /// Plural label used in headings
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Expense => "Expenses",
            Self::Income => "Incomes",
            Self::Budget => "Budgets",
        }
    }
}
