//! Field-level validation errors
//!
//! Raised at the boundary where loosely-typed request input is converted into
//! typed drafts, before anything touches the store.

use thiserror::Error;

/// A single field constraint violation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Validation failed for '{field}': {message}")]
pub struct ValidationError {
    /// Path of the offending field, e.g. `participants[1].name`
    pub field: String,
    /// Human readable description of the violated constraint
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Prefix the field path with the list it came from
    pub fn within(self, list: &str, index: usize) -> Self {
        Self {
            field: format!("{}[{}].{}", list, index, self.field),
            message: self.message,
        }
    }

    pub fn error_code(&self) -> &'static str {
        "VALIDATION_FAILED"
    }
}
