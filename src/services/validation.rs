use crate::errors::ValidationError;

/// Minimum length (in characters) of every group, participant and animator name
pub const MIN_NAME_LENGTH: usize = 2;

/// Field constraints shared by every document type
pub struct ValidationService;

impl ValidationService {
    /// Validate a required name: non-empty and at least `MIN_NAME_LENGTH` characters.
    /// The value is kept exactly as supplied.
    pub fn validate_name(field: &str, name: String) -> Result<String, ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::new(field, "is required"));
        }

        if name.chars().count() < MIN_NAME_LENGTH {
            return Err(ValidationError::new(
                field,
                format!("must be at least {} characters long", MIN_NAME_LENGTH),
            ));
        }

        Ok(name)
    }

    /// Reject a missing value for a field the schema leaves nullable
    pub fn require<T>(field: &str, value: Option<T>) -> Result<T, ValidationError> {
        value.ok_or_else(|| ValidationError::new(field, "is required"))
    }

    /// Reject null entries in a list of strings
    pub fn require_entries(
        field: &str,
        values: Vec<Option<String>>,
    ) -> Result<Vec<String>, ValidationError> {
        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                value.ok_or_else(|| {
                    ValidationError::new(format!("{}[{}]", field, index), "must not be null")
                })
            })
            .collect()
    }
}
