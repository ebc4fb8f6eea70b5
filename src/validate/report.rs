//! Per-field validation failure report

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation failure messages keyed by field name.
///
/// A field absent from the report is valid; overall validity is the
/// report being empty — there is no separate boolean to keep in sync.
/// Rebuilt wholesale on every validation pass, never merged with a
/// previous pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorReport {
    errors: BTreeMap<String, String>,
}

impl ErrorReport {
    /// Creates an empty (all-valid) report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure message for a field.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    /// Returns the failure message for a field, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Whether the field has a recorded failure.
    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Drops the entry for a field, if any.
    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.errors.remove(field)
    }

    /// Iterates entries in sorted field order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.errors.iter()
    }

    /// Returns the number of failing fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether every field passed — the sole signal of validity.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_signals_validity() {
        let report = ErrorReport::new();
        assert!(report.is_empty());
        assert_eq!(report.len(), 0);
        assert_eq!(report.to_string(), "");
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut report = ErrorReport::new();
        report.insert("email", "Invalid email format");
        assert!(!report.is_empty());
        assert_eq!(report.get("email"), Some("Invalid email format"));
        assert!(report.get("age").is_none());
    }

    #[test]
    fn test_display_joins_entries() {
        let mut report = ErrorReport::new();
        report.insert("email", "Email is required");
        report.insert("terms", "Accept Terms is required");
        assert_eq!(
            report.to_string(),
            "email: Email is required; terms: Accept Terms is required"
        );
    }

    #[test]
    fn test_serializes_as_plain_mapping() {
        let mut report = ErrorReport::new();
        report.insert("email", "Invalid email format");
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"email":"Invalid email format"}"#);
    }
}
