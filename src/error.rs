//! Error types for Pocketbook
//!
//! Search parsing and matching never fail; everything that touches disk,
//! settings, or user-supplied record data reports through [`PocketError`].

use thiserror::Error;

/// The main error type for Pocketbook operations
#[derive(Error, Debug)]
pub enum PocketError {
    /// Unreadable settings or unresolvable base directory
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("JSON error: {0}")]
    Json(String),

    /// Rejected record data or command-line input
    #[error("Validation error: {0}")]
    Validation(String),

    /// No record matches a user-supplied id
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Record files could not be read, parsed or replaced
    #[error("Storage error: {0}")]
    Storage(String),

    /// CSV or JSON output failed
    #[error("Export error: {0}")]
    Export(String),
}

impl PocketError {
    /// Create a "not found" error for a record of any kind
    pub fn record_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Record",
            identifier: identifier.into(),
        }
    }

    /// True for [`PocketError::NotFound`]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True for [`PocketError::Validation`]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for PocketError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PocketError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for PocketError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for Pocketbook operations
pub type PocketResult<T> = Result<T, PocketError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message() {
        let err = PocketError::Validation("Expense amount must be positive".into());
        assert_eq!(err.to_string(), "Validation error: Expense amount must be positive");
        assert!(err.is_validation());
    }

    #[test]
    fn test_not_found_error() {
        let err = PocketError::record_not_found("exp-1234abcd");
        assert_eq!(err.to_string(), "Record not found: exp-1234abcd");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_conversions() {
        let err: PocketError = std::io::Error::other("disk full").into();
        assert!(matches!(err, PocketError::Io(ref msg) if msg == "disk full"));

        let err: PocketError = serde_json::from_str::<u32>("x").unwrap_err().into();
        assert!(matches!(err, PocketError::Json(_)));
    }
}
