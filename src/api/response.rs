//! API response types
//!
//! JSON response formatting for all operations.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::ApiError;

/// Unified response envelope.
///
/// `status` is `"ok"` for handled requests — including submits that
/// fail validation, whose verdict rides in `data` — and `"error"` only
/// for malformed requests and rejected schema edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Response {
    Ok { data: Value },
    Error { code: String, message: String },
}

impl Response {
    /// Create a success response
    pub fn success(data: Value) -> Self {
        Response::Ok { data }
    }

    /// Create an empty success response
    pub fn empty() -> Self {
        Response::Ok { data: Value::Null }
    }

    /// Create an error response
    pub fn error(err: &ApiError) -> Self {
        Response::Error {
            code: err.code().to_string(),
            message: err.message().to_string(),
        }
    }

    /// Check if this is a success response
    pub fn is_success(&self) -> bool {
        matches!(self, Response::Ok { .. })
    }

    /// Convert to a JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("response serialization cannot fail")
    }
}
