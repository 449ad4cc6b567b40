//! GraphQL conversion for domain errors
//!
//! Every domain error becomes an `async_graphql::Error` with a `code`
//! extension plus whatever context identifies the offending value.
//!
//! ```rust
//! use facilitation::errors::{GroupError, ToGraphQLError};
//!
//! let err = GroupError::DuplicateName("Morning circle".to_string());
//! let graphql_err = err.to_graphql_error();
//! assert!(graphql_err.message.contains("Morning circle"));
//! ```

use async_graphql::{Error as GraphQLError, ErrorExtensions};

use super::*;

/// Convert domain errors to GraphQL errors with error codes
pub trait ToGraphQLError {
    /// Convert to GraphQL error with structured extensions
    fn to_graphql_error(&self) -> GraphQLError;

    /// Whether the error rejects the caller's input rather than reporting a failure
    fn is_validation(&self) -> bool;
}

impl ToGraphQLError for ValidationError {
    fn to_graphql_error(&self) -> GraphQLError {
        GraphQLError::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.error_code());
            e.set("field", self.field.as_str());
        })
    }

    fn is_validation(&self) -> bool {
        true
    }
}

impl ToGraphQLError for StoreError {
    fn to_graphql_error(&self) -> GraphQLError {
        let code = self.error_code();
        let message = self.to_string();

        GraphQLError::new(message).extend_with(|_, e| {
            e.set("code", code);

            match self {
                StoreError::Constraint { entity, .. } | StoreError::Duplicate { entity, .. } => {
                    e.set("entity", *entity);
                }
                _ => {}
            }
        })
    }

    fn is_validation(&self) -> bool {
        self.is_constraint_violation()
    }
}

impl ToGraphQLError for GroupError {
    fn to_graphql_error(&self) -> GraphQLError {
        match self {
            GroupError::Validation(inner) => inner.to_graphql_error(),
            GroupError::Store(inner) => inner.to_graphql_error(),
            _ => {
                let code = self.error_code();
                let message = self.to_string();

                GraphQLError::new(message).extend_with(|_, e| {
                    e.set("code", code);

                    match self {
                        GroupError::DuplicateName(name) => {
                            e.set("field", "name");
                            e.set("name", name.as_str());
                        }
                        GroupError::CascadeFailed { group_id, .. } => {
                            e.set("groupId", group_id.as_str());
                        }
                        _ => {}
                    }
                })
            }
        }
    }

    fn is_validation(&self) -> bool {
        GroupError::is_validation(self)
    }
}

impl ToGraphQLError for ConversationError {
    fn to_graphql_error(&self) -> GraphQLError {
        match self {
            ConversationError::Validation(inner) => inner.to_graphql_error(),
            ConversationError::Store(inner) => inner.to_graphql_error(),
            ConversationError::OutOfRange { index, length } => {
                GraphQLError::new(self.to_string()).extend_with(|_, e| {
                    e.set("code", self.error_code());
                    e.set("index", *index);
                    e.set("length", *length as i64);
                })
            }
        }
    }

    fn is_validation(&self) -> bool {
        ConversationError::is_validation(self)
    }
}

/// Extension trait for Result<T, E> to convert errors to GraphQL errors
pub trait ResultExt<T> {
    /// Convert error to GraphQL error
    fn to_graphql_result(self) -> Result<T, GraphQLError>;
}

impl<T, E: ToGraphQLError> ResultExt<T> for Result<T, E> {
    fn to_graphql_result(self) -> Result<T, GraphQLError> {
        self.map_err(|e| e.to_graphql_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_graphql::Value;

    fn extension<'a>(error: &'a GraphQLError, key: &str) -> Option<&'a Value> {
        error.extensions.as_ref().and_then(|ext| ext.get(key))
    }

    #[test]
    fn test_validation_error_to_graphql() {
        let err = ValidationError::new("animators[0].name", "is required");
        let graphql_err = err.to_graphql_error();

        assert_eq!(
            extension(&graphql_err, "code"),
            Some(&Value::from("VALIDATION_FAILED"))
        );
        assert_eq!(
            extension(&graphql_err, "field"),
            Some(&Value::from("animators[0].name"))
        );
    }

    #[test]
    fn test_duplicate_name_to_graphql() {
        let graphql_err = GroupError::DuplicateName("G1".to_string()).to_graphql_error();

        assert!(graphql_err.message.contains("G1"));
        assert_eq!(
            extension(&graphql_err, "code"),
            Some(&Value::from("VALIDATION_FAILED"))
        );
        assert_eq!(extension(&graphql_err, "name"), Some(&Value::from("G1")));
    }

    #[test]
    fn test_out_of_range_to_graphql() {
        let graphql_err = ConversationError::OutOfRange { index: 4, length: 2 }.to_graphql_error();

        assert_eq!(
            extension(&graphql_err, "code"),
            Some(&Value::from("OUT_OF_RANGE"))
        );
        assert_eq!(extension(&graphql_err, "index"), Some(&Value::from(4i64)));
        assert_eq!(extension(&graphql_err, "length"), Some(&Value::from(2i64)));
    }

    #[test]
    fn test_result_ext() {
        let result: Result<(), ConversationError> =
            Err(ConversationError::OutOfRange { index: 1, length: 0 });
        assert!(result.to_graphql_result().is_err());
    }
}
