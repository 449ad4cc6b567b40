//! Database error categorization
//!
//! sea-orm surfaces most constraint failures as opaque execution errors. This
//! module sorts them into the handful of categories the entity store cares
//! about, so a rejected document can be told apart from a broken connection.
//!
//! # Examples
//!
//! ```rust
//! use facilitation::common::db_errors::*;
//! use sea_orm::DbErr;
//!
//! let err = DbErr::Custom("CHECK constraint failed: length(name) >= 2".to_string());
//! assert_eq!(DbErrorKind::from_db_err(&err), DbErrorKind::CheckViolation);
//!
//! let (kind, message) = format_db_error("insert participant", &err);
//! assert!(kind.is_constraint_violation());
//! assert_eq!(message, "insert participant: check constraint violation");
//! ```

use sea_orm::{DbErr, SqlErr};

/// Categories of database errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbErrorKind {
    /// Unique constraint violation
    UniqueViolation,

    /// CHECK constraint violation (e.g. minimum name length)
    CheckViolation,

    /// NOT NULL constraint violation (required field missing)
    NotNullViolation,

    /// Unknown/other database error
    Unknown,
}

impl DbErrorKind {
    /// Categorize a sea_orm database error
    pub fn from_db_err(err: &DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
            return Self::UniqueViolation;
        }

        // The schema has no foreign keys; lookups that miss and pool failures fall to Unknown
        let msg_lower = err.to_string().to_lowercase();
        if msg_lower.contains("unique constraint") || msg_lower.contains("duplicate") {
            Self::UniqueViolation
        } else if msg_lower.contains("check constraint") {
            Self::CheckViolation
        } else if msg_lower.contains("not null constraint") {
            Self::NotNullViolation
        } else {
            Self::Unknown
        }
    }

    /// Check if the store rejected the document because of its content
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            Self::UniqueViolation | Self::CheckViolation | Self::NotNullViolation
        )
    }
}

/// Format database error with operation context
pub fn format_db_error(operation: &str, err: &DbErr) -> (DbErrorKind, String) {
    let kind = DbErrorKind::from_db_err(err);

    let message = match kind {
        DbErrorKind::UniqueViolation => format!("{}: duplicate key violation", operation),
        DbErrorKind::CheckViolation => format!("{}: check constraint violation", operation),
        DbErrorKind::NotNullViolation => format!("{}: required field missing", operation),
        DbErrorKind::Unknown => format!("{}: database error - {}", operation, err),
    };

    (kind, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_record_not_found_as_unknown() {
        let err = DbErr::RecordNotFound("Group not found".to_string());
        let kind = DbErrorKind::from_db_err(&err);
        assert_eq!(kind, DbErrorKind::Unknown);
        assert!(!kind.is_constraint_violation());
    }

    #[test]
    fn test_categorize_unique_violation() {
        let err = DbErr::Custom("UNIQUE constraint failed: groups.name".to_string());
        let kind = DbErrorKind::from_db_err(&err);
        assert_eq!(kind, DbErrorKind::UniqueViolation);
        assert!(kind.is_constraint_violation());
    }

    #[test]
    fn test_categorize_check_violation() {
        let err = DbErr::Custom("CHECK constraint failed: length(name) >= 2".to_string());
        assert_eq!(DbErrorKind::from_db_err(&err), DbErrorKind::CheckViolation);
    }

    #[test]
    fn test_categorize_not_null_violation() {
        let err = DbErr::Custom("NOT NULL constraint failed: animators.name".to_string());
        assert_eq!(DbErrorKind::from_db_err(&err), DbErrorKind::NotNullViolation);
    }

    #[test]
    fn test_categorize_unknown() {
        let err = DbErr::Custom("disk I/O error".to_string());
        let kind = DbErrorKind::from_db_err(&err);
        assert_eq!(kind, DbErrorKind::Unknown);
        assert!(!kind.is_constraint_violation());
    }

    #[test]
    fn test_format_db_error() {
        let err = DbErr::Custom("UNIQUE constraint failed".to_string());
        let (kind, message) = format_db_error("insert group", &err);

        assert_eq!(kind, DbErrorKind::UniqueViolation);
        assert_eq!(message, "insert group: duplicate key violation");
    }

    #[test]
    fn test_format_unknown_keeps_details() {
        let err = DbErr::Custom("disk I/O error".to_string());
        let (_, message) = format_db_error("update animator", &err);
        assert!(message.contains("disk I/O error"));
    }
}
