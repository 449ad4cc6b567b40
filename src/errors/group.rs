//! Group-related error types

use thiserror::Error;

use super::{StoreError, ValidationError};

/// Errors raised while creating, editing or deleting groups
#[derive(Error, Debug)]
pub enum GroupError {
    /// An input field failed its constraints
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Another group already uses this name
    #[error("A group named '{0}' already exists")]
    DuplicateName(String),

    /// A child participant/animator write failed; the whole cascade was undone
    #[error("Group '{group_id}' was rolled back: {source}")]
    CascadeFailed {
        group_id: String,
        #[source]
        source: StoreError,
    },

    /// Entity store failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl GroupError {
    /// Map a failed group write, turning a uniqueness rejection into `DuplicateName`
    pub fn from_group_write(name: &str, err: StoreError) -> Self {
        match err {
            StoreError::Duplicate { .. } => GroupError::DuplicateName(name.to_string()),
            other => GroupError::Store(other),
        }
    }

    /// True when the caller's input was rejected, by validation or by a store constraint
    pub fn is_validation(&self) -> bool {
        match self {
            GroupError::Validation(_) | GroupError::DuplicateName(_) => true,
            GroupError::CascadeFailed { source, .. } | GroupError::Store(source) => {
                source.is_constraint_violation()
            }
        }
    }

    /// Get error code for GraphQL responses
    pub fn error_code(&self) -> &'static str {
        match self {
            GroupError::Validation(_) | GroupError::DuplicateName(_) => "VALIDATION_FAILED",
            GroupError::CascadeFailed { source, .. } if source.is_constraint_violation() => {
                "VALIDATION_FAILED"
            }
            GroupError::CascadeFailed { .. } => "CASCADE_FAILED",
            GroupError::Store(source) => source.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DbErr;

    #[test]
    fn test_duplicate_name() {
        let err = GroupError::DuplicateName("G1".to_string());
        assert_eq!(err.to_string(), "A group named 'G1' already exists");
        assert!(err.is_validation());
        assert_eq!(err.error_code(), "VALIDATION_FAILED");
    }

    #[test]
    fn test_group_write_duplicate_maps_to_duplicate_name() {
        let err = GroupError::from_group_write(
            "G1",
            StoreError::Duplicate {
                entity: "group",
                message: "UNIQUE constraint failed: groups.name".to_string(),
            },
        );
        assert!(matches!(err, GroupError::DuplicateName(ref name) if name == "G1"));
    }

    #[test]
    fn test_cascade_failure_codes() {
        let err = GroupError::CascadeFailed {
            group_id: "abc".to_string(),
            source: StoreError::Database(DbErr::Custom("connection reset".to_string())),
        };
        assert!(!err.is_validation());
        assert_eq!(err.error_code(), "CASCADE_FAILED");

        let err = GroupError::CascadeFailed {
            group_id: "abc".to_string(),
            source: StoreError::Constraint {
                entity: "animator",
                message: "CHECK constraint failed".to_string(),
            },
        };
        assert!(err.is_validation());
        assert_eq!(err.error_code(), "VALIDATION_FAILED");
    }
}
