//! Record service
//!
//! Validates and stores new expenses, incomes and budgets.

use crate::error::{PocketError, PocketResult};
use crate::models::{Budget, Expense, Income};
use crate::storage::Storage;

/// Service for adding and removing records
pub struct RecordService<'a> {
    storage: &'a Storage,
}

impl<'a> RecordService<'a> {
    /// Create a new record service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and save a new expense
    pub fn add_expense(&self, mut expense: Expense) -> PocketResult<Expense> {
        expense.description = expense.description.trim().to_string();
        expense.category = expense.category.trim().to_string();
        expense.card_name = expense
            .card_name
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        expense
            .validate()
            .map_err(|e| PocketError::Validation(e.to_string()))?;

        self.storage.expenses.insert(expense.clone())?;
        self.storage.expenses.save()?;
        log::info!("added expense {}", expense.id);
        Ok(expense)
    }

    /// Validate and save a new income
    pub fn add_income(&self, mut income: Income) -> PocketResult<Income> {
        income.source = income.source.trim().to_string();

        income
            .validate()
            .map_err(|e| PocketError::Validation(e.to_string()))?;

        self.storage.incomes.insert(income.clone())?;
        self.storage.incomes.save()?;
        log::info!("added income {}", income.id);
        Ok(income)
    }

    /// Validate and save a new budget
    pub fn add_budget(&self, mut budget: Budget) -> PocketResult<Budget> {
        budget.name = budget.name.trim().to_string();

        budget
            .validate()
            .map_err(|e| PocketError::Validation(e.to_string()))?;

        self.storage.budgets.insert(budget.clone())?;
        self.storage.budgets.save()?;
        log::info!("added budget {}", budget.id);
        Ok(budget)
    }
}
