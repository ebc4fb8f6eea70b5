//! Schema configuration error tier
//!
//! These errors are raised synchronously from registry mutation and
//! session construction; a rejected operation leaves the schema
//! unchanged. Failures of submitted *values* are never errors — they
//! travel as the validation report.

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised when a field descriptor or registry mutation is malformed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Descriptor supplied without a name
    #[error("Field name must not be empty")]
    EmptyFieldName,

    /// Descriptor supplied without a label
    #[error("Field '{name}' has an empty label")]
    EmptyFieldLabel { name: String },

    /// Name collides with an existing field in the registry
    #[error("Field '{name}' already exists")]
    DuplicateField { name: String },

    /// Option-backed kind declared without any options
    #[error("Field '{name}' requires at least one option")]
    MissingOptions { name: String },

    /// Descriptor references a validator that is not registered
    #[error("Field '{name}' references unknown validator '{validator}'")]
    UnknownValidator { name: String, validator: String },
}

impl SchemaError {
    /// Returns the stable error code consumed by the API layer
    pub fn code(&self) -> &'static str {
        match self {
            SchemaError::EmptyFieldName => "FORM_EMPTY_FIELD_NAME",
            SchemaError::EmptyFieldLabel { .. } => "FORM_EMPTY_FIELD_LABEL",
            SchemaError::DuplicateField { .. } => "FORM_DUPLICATE_FIELD",
            SchemaError::MissingOptions { .. } => "FORM_MISSING_OPTIONS",
            SchemaError::UnknownValidator { .. } => "FORM_UNKNOWN_VALIDATOR",
        }
    }

    /// Returns the field name the error refers to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            SchemaError::EmptyFieldName => None,
            SchemaError::EmptyFieldLabel { name }
            | SchemaError::DuplicateField { name }
            | SchemaError::MissingOptions { name }
            | SchemaError::UnknownValidator { name, .. } => Some(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(SchemaError::EmptyFieldName.code(), "FORM_EMPTY_FIELD_NAME");
        assert_eq!(
            SchemaError::DuplicateField { name: "email".into() }.code(),
            "FORM_DUPLICATE_FIELD"
        );
        assert_eq!(
            SchemaError::UnknownValidator {
                name: "email".into(),
                validator: "missing".into()
            }
            .code(),
            "FORM_UNKNOWN_VALIDATOR"
        );
    }

    #[test]
    fn test_error_field_accessor() {
        assert_eq!(SchemaError::EmptyFieldName.field(), None);
        let err = SchemaError::MissingOptions { name: "gender".into() };
        assert_eq!(err.field(), Some("gender"));
    }

    #[test]
    fn test_error_display_names_the_field() {
        let err = SchemaError::DuplicateField { name: "email".into() };
        assert!(err.to_string().contains("email"));
    }
}
