//! Entity store error types

use thiserror::Error;

use crate::common::db_errors::DbErrorKind;

/// Errors raised by an `EntityStore` implementation
#[derive(Error, Debug)]
pub enum StoreError {
    /// A per-document field constraint was rejected by the store
    #[error("Constraint violated on {entity}: {message}")]
    Constraint {
        entity: &'static str,
        message: String,
    },

    /// A uniqueness constraint was rejected by the store
    #[error("Duplicate {entity}: {message}")]
    Duplicate {
        entity: &'static str,
        message: String,
    },

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A JSON list column could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Categorize a raw database error raised while writing `entity`
    pub fn from_db_err(entity: &'static str, err: sea_orm::DbErr) -> Self {
        match DbErrorKind::from_db_err(&err) {
            DbErrorKind::UniqueViolation => StoreError::Duplicate {
                entity,
                message: err.to_string(),
            },
            DbErrorKind::CheckViolation | DbErrorKind::NotNullViolation => {
                StoreError::Constraint {
                    entity,
                    message: err.to_string(),
                }
            }
            _ => StoreError::Database(err),
        }
    }

    /// True when the store rejected the document itself rather than failing
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            StoreError::Constraint { .. } | StoreError::Duplicate { .. }
        )
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::Constraint { .. } | StoreError::Duplicate { .. } => "VALIDATION_FAILED",
            StoreError::Database(_) => "DATABASE_ERROR",
            StoreError::Serialization(_) => "INTERNAL_ERROR",
        }
    }
}
