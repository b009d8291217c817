//! Expense model
//!
//! A single outgoing payment: what it was, how much, when, and which card
//! paid for it.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    NonPositiveAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Expense description cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be positive, got {}", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// A recorded expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,

    /// Day the money was spent
    pub date: NaiveDate,

    /// Amount spent (always positive)
    pub amount: Money,

    /// What the expense was for, usually the merchant
    pub description: String,

    /// Spending category name
    #[serde(default)]
    pub category: String,

    /// Card or account used to pay
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_name: Option<String>,

    #[serde(default)]
    pub notes: String,

    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense
    pub fn new(date: NaiveDate, amount: Money, description: impl Into<String>) -> Self {
        Self {
            id: ExpenseId::new(),
            date,
            amount,
            description: description.into(),
            category: String::new(),
            card_name: None,
            notes: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Set the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the card used to pay
    pub fn with_card(mut self, card_name: impl Into<String>) -> Self {
        self.card_name = Some(card_name.into());
        self
    }

    /// Set the notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }
        if self.amount.cents() <= 0 {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, day).unwrap()
    }

    #[test]
    fn test_builder() {
        let expense = Expense::new(jan(3), Money::from_cents(1233), "Starbucks")
            .with_category("Dining")
            .with_card("Visa");
        assert_eq!(expense.category, "Dining");
        assert_eq!(expense.card_name.as_deref(), Some("Visa"));
        assert!(expense.validate().is_ok());
        assert_eq!(expense.to_string(), "2026-01-03 Starbucks $12.33");
    }

    #[test]
    fn test_validation() {
        let blank = Expense::new(jan(3), Money::from_cents(100), "  ");
        assert_eq!(blank.validate(), Err(ExpenseValidationError::EmptyDescription));

        let zero = Expense::new(jan(3), Money::zero(), "Coffee");
        assert!(matches!(
            zero.validate(),
            Err(ExpenseValidationError::NonPositiveAmount(_))
        ));
    }

    #[test]
    fn test_serialization_skips_missing_card() {
        let expense = Expense::new(jan(3), Money::from_cents(500), "Bus");
        let json = serde_json::to_string(&expense).unwrap();
        assert!(!json.contains("card_name"));
        let back: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, expense.id);
        assert_eq!(back.card_name, None);
    }
}
