//! Custom error types for SplitLedger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. The first four variants are raised by the
//! ledger engine itself; the rest belong to the storage and CLI layers.

use thiserror::Error;

use crate::models::{Money, SplitPolicy};

/// The main error type for SplitLedger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Unrecognized split policy, or parameters that don't match the policy
    #[error("Invalid split policy: {0}")]
    InvalidPolicy(String),

    /// EXACT or PERCENT inputs don't reconcile to the expense total
    #[error("{policy} split does not reconcile: expected {expected}, got {actual}")]
    SplitMismatch {
        policy: SplitPolicy,
        expected: String,
        actual: String,
    },

    /// A named participant is not a member of the group
    #[error("Unknown participant: {0}")]
    UnknownParticipant(String),

    /// Net balances do not sum to zero
    #[error("Unbalanced ledger: balances sum to {total} minor units instead of zero")]
    UnbalancedLedger { total: Money },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for input values
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LedgerError {
    /// Create a "not found" error for participants
    pub fn participant_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Participant",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for groups
    pub fn group_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Group",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error was raised by the ledger engine on bad input
    pub fn is_ledger_rule(&self) -> bool {
        matches!(
            self,
            Self::InvalidPolicy(_)
                | Self::SplitMismatch { .. }
                | Self::UnknownParticipant(_)
                | Self::UnbalancedLedger { .. }
        )
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for SplitLedger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = LedgerError::participant_not_found("alice");
        assert_eq!(err.to_string(), "Participant not found: alice");
        assert!(err.is_not_found());
        assert!(!err.is_ledger_rule());
    }

    #[test]
    fn test_split_mismatch_display() {
        let err = LedgerError::SplitMismatch {
            policy: SplitPolicy::Percent,
            expected: "100%".into(),
            actual: "99%".into(),
        };
        assert_eq!(
            err.to_string(),
            "PERCENT split does not reconcile: expected 100%, got 99%"
        );
        assert!(err.is_ledger_rule());
    }

    #[test]
    fn test_unbalanced_display() {
        let err = LedgerError::UnbalancedLedger {
            total: Money::from_minor(-3),
        };
        assert_eq!(
            err.to_string(),
            "Unbalanced ledger: balances sum to -3 minor units instead of zero"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LedgerError = io_err.into();
        assert!(matches!(err, LedgerError::Io(_)));
    }
}
