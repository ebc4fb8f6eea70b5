//! API request types
//!
//! JSON request parsing for all supported operations.

use serde::{Deserialize, Serialize};

use crate::record::InputEvent;
use crate::schema::FieldDescriptor;

use super::errors::{ApiError, ApiResult};

/// Operation envelope the presentation layer sends.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// Append a field to the schema
    AddField(FieldDescriptor),
    /// Remove a field by name (idempotent)
    RemoveField { name: String },
    /// Store one input event in the working record
    UpdateValue(InputEvent),
    /// Validate the record and resolve the submission
    Submit,
    /// Enumerate the current field sequence
    Fields,
}

/// Raw request for parsing
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawRequest {
    op: String,
    #[serde(default)]
    field: Option<FieldDescriptor>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    checked: Option<bool>,
}

impl Request {
    /// Parse a request from a JSON string
    pub fn parse(json: &str) -> ApiResult<Self> {
        let raw: RawRequest = serde_json::from_str(json)
            .map_err(|e| ApiError::invalid_request(format!("Invalid JSON: {}", e)))?;

        match raw.op.as_str() {
            "add_field" => {
                let field = raw
                    .field
                    .ok_or_else(|| ApiError::invalid_request("Missing field"))?;
                Ok(Request::AddField(field))
            }
            "remove_field" => {
                let name = raw
                    .name
                    .ok_or_else(|| ApiError::invalid_request("Missing name"))?;
                Ok(Request::RemoveField { name })
            }
            "update_value" => {
                let name = raw
                    .name
                    .ok_or_else(|| ApiError::invalid_request("Missing name"))?;
                Ok(Request::UpdateValue(InputEvent {
                    name,
                    value: raw.value.unwrap_or_default(),
                    checked: raw.checked.unwrap_or(false),
                }))
            }
            "submit" => Ok(Request::Submit),
            "fields" => Ok(Request::Fields),
            other => Err(ApiError::unknown_operation(other)),
        }
    }
}
