//! API error types
//!
//! Pass-through: schema configuration errors keep their original codes;
//! the API layer adds only request-shape errors of its own. Failures of
//! submitted values never become API errors — they ride in the submit
//! payload as the error report.

use std::fmt;

use crate::schema::SchemaError;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API error with a stable code and a human-readable message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    code: String,
    message: String,
}

impl ApiError {
    /// Create an invalid request error
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self {
            code: "FORM_INVALID_REQUEST".to_string(),
            message: reason.into(),
        }
    }

    /// Create an unknown operation error
    pub fn unknown_operation(op: impl Into<String>) -> Self {
        Self {
            code: "FORM_UNKNOWN_OPERATION".to_string(),
            message: format!("Unknown operation: {}", op.into()),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<SchemaError> for ApiError {
    fn from(err: SchemaError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
