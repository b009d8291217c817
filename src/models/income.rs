//! Income model
//!
//! Money received on a given day, such as a paycheck or a refund.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ids::IncomeId;
use super::money::Money;

/// Validation errors for incomes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    EmptySource,
    NonPositiveAmount,
}

impl std::fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySource => write!(f, "Income source cannot be empty"),
            Self::NonPositiveAmount => write!(f, "Income amount must be positive"),
        }
    }
}

impl std::error::Error for IncomeValidationError {}

/// A recorded income
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Income {
    pub id: IncomeId,
    pub date: NaiveDate,
    pub amount: Money,
    /// Who paid, e.g. an employer
    pub source: String,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

impl Income {
    /// Create a new income
    pub fn new(date: NaiveDate, amount: Money, source: impl Into<String>) -> Self {
        Self {
            id: IncomeId::new(),
            date,
            amount,
            source: source.into(),
            notes: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Set the notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Validate the income
    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if self.source.trim().is_empty() {
            return Err(IncomeValidationError::EmptySource);
        }
        if self.amount.cents() <= 0 {
            return Err(IncomeValidationError::NonPositiveAmount);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        assert!(Income::new(date, Money::from_cents(250000), "Acme Corp")
            .validate()
            .is_ok());
        assert_eq!(
            Income::new(date, Money::from_cents(100), "").validate(),
            Err(IncomeValidationError::EmptySource)
        );
        assert_eq!(
            Income::new(date, Money::from_cents(-100), "Refund").validate(),
            Err(IncomeValidationError::NonPositiveAmount)
        );
    }
}
