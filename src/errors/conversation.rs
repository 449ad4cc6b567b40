//! Conversation list error types

use thiserror::Error;

use super::{StoreError, ValidationError};

/// Errors raised while editing an animator's conversation list
#[derive(Error, Debug)]
pub enum ConversationError {
    /// Index outside `[0, length)`
    #[error("Conversation index {index} is out of range for a list of {length} entries")]
    OutOfRange { index: i64, length: usize },

    /// An input field failed its constraints
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Entity store failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ConversationError {
    /// True when the caller's input was rejected, by validation or by a store constraint
    pub fn is_validation(&self) -> bool {
        match self {
            ConversationError::OutOfRange { .. } => false,
            ConversationError::Validation(_) => true,
            ConversationError::Store(source) => source.is_constraint_violation(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ConversationError::OutOfRange { .. } => "OUT_OF_RANGE",
            ConversationError::Validation(_) => "VALIDATION_FAILED",
            ConversationError::Store(source) => source.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range() {
        let err = ConversationError::OutOfRange { index: 5, length: 2 };
        assert_eq!(
            err.to_string(),
            "Conversation index 5 is out of range for a list of 2 entries"
        );
        assert!(!err.is_validation());
        assert_eq!(err.error_code(), "OUT_OF_RANGE");
    }

    #[test]
    fn test_store_constraint_is_validation() {
        let err = ConversationError::Store(StoreError::Constraint {
            entity: "animator",
            message: "CHECK constraint failed".to_string(),
        });
        assert!(err.is_validation());
        assert_eq!(err.error_code(), "VALIDATION_FAILED");
    }

    #[test]
    fn test_negative_index_is_reported_verbatim() {
        let err = ConversationError::OutOfRange { index: -1, length: 0 };
        assert!(err.to_string().contains("-1"));
    }
}
