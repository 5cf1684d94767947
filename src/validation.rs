use std::fmt;

/// Validation errors for pub/sub configuration types
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required field is empty or missing
    RequiredFieldMissing { field: &'static str },
}

impl ValidationError {
    /// Shorthand used by the config validators
    pub(crate) fn required(field: &'static str) -> Self {
        ValidationError::RequiredFieldMissing { field }
    }

    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::RequiredFieldMissing { field } => field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::RequiredFieldMissing { field } => {
                write!(f, "required field '{}' is missing or empty", field)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
