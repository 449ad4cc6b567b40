//! Domain-specific error types for the facilitation service
//!
//! Each area of the service owns a structured error type so that callers can
//! tell a rejected input apart from a failing store.
//!
//! # Error Categories
//!
//! - **ValidationError**: a field constraint (required, minimum length) rejected an input
//! - **StoreError**: the entity store refused or failed a read/write
//! - **GroupError**: group creation, editing and deletion (including cascades)
//! - **ConversationError**: conversation list edits on an animator
//!
//! Not-found is deliberately absent: a missing group or animator is reported as
//! an empty result, never as an error.
//!
//! # GraphQL Integration
//!
//! Every error type converts into an `async_graphql::Error` carrying a stable
//! `code` extension through the `ToGraphQLError` trait.
//!
//! # Examples
//!
//! ```rust
//! use facilitation::errors::{ConversationError, ToGraphQLError};
//!
//! let err = ConversationError::OutOfRange { index: 5, length: 2 };
//! assert_eq!(err.error_code(), "OUT_OF_RANGE");
//!
//! let graphql_err = err.to_graphql_error();
//! assert!(graphql_err.message.contains("out of range"));
//! ```

pub mod common;
pub mod conversation;
pub mod group;
pub mod store;
pub mod validation;

pub use common::{ResultExt, ToGraphQLError};
pub use conversation::ConversationError;
pub use group::GroupError;
pub use store::StoreError;
pub use validation::ValidationError;

/// Result type alias for entity store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type alias for group operations
pub type GroupResult<T> = Result<T, GroupError>;

/// Result type alias for conversation operations
pub type ConversationResult<T> = Result<T, ConversationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_result_alias() {
        let result: GroupResult<()> = Err(GroupError::DuplicateName("G1".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_conversation_result_alias() {
        let result: ConversationResult<()> =
            Err(ConversationError::OutOfRange { index: 3, length: 1 });
        assert!(result.is_err());
    }

    #[test]
    fn test_store_result_alias() {
        let result: StoreResult<()> = Err(StoreError::Constraint {
            entity: "participant",
            message: "too short".to_string(),
        });
        assert!(result.is_err());
    }
}
