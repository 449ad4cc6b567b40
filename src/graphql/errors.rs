use async_graphql::*;

use crate::errors::ToGraphQLError;

/// Structured error builder for faults raised by the GraphQL layer itself
pub struct StructuredError;

impl StructuredError {
    /// A stored record lacks a value the contract declares non-null
    pub fn missing_value(resource: &str, id: &str, field: &str) -> Error {
        Error::new(format!(
            "{} with id '{}' has no recorded {}",
            resource, id, field
        ))
        .extend_with(|_, e| {
            e.set("code", "MISSING_VALUE");
            e.set("resource", resource);
            e.set("field", field);
        })
    }

    /// Convert a mutation fault. Validation faults also carry the arguments
    /// the mutation was called with under `invalidArgs`.
    pub fn rejected<E: ToGraphQLError>(err: &E, args: &serde_json::Value) -> Error {
        let error = err.to_graphql_error();
        if !err.is_validation() {
            return error;
        }

        match Value::from_json(args.clone()) {
            Ok(value) => error.extend_with(|_, e| e.set("invalidArgs", value)),
            Err(e) => {
                tracing::warn!("Could not attach invalidArgs to error: {}", e);
                error
            }
        }
    }
}
