//! Field descriptor types for the form schema
//!
//! Supported field kinds:
//! - text: free-form string input
//! - email: string input with email affordance
//! - number: numeric input, stored as the raw string as typed
//! - password: masked string input
//! - radio: exactly one selection from a fixed option list
//! - checkbox: boolean toggle (single-option consent is the supported case)

use serde::{Deserialize, Serialize};

use super::errors::{SchemaError, SchemaResult};

/// Supported field kinds — a closed enumeration.
///
/// Adding a kind means extending this enum and the validation engine's
/// missing-value rules together; there is no open string escape hatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Number,
    Password,
    Radio,
    Checkbox,
}

impl FieldKind {
    /// Returns the kind name for error messages and serialized schemas
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Number => "number",
            FieldKind::Password => "password",
            FieldKind::Radio => "radio",
            FieldKind::Checkbox => "checkbox",
        }
    }

    /// Whether descriptors of this kind must carry a non-empty option list
    pub fn requires_options(&self) -> bool {
        matches!(self, FieldKind::Radio | FieldKind::Checkbox)
    }

    /// Whether values of this kind are stored as the raw string as typed
    pub fn is_text_valued(&self) -> bool {
        !matches!(self, FieldKind::Checkbox)
    }
}

/// Declarative specification of one form input.
///
/// Immutable once added to a registry: edits replace the descriptor
/// wholesale, never mutate it in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Unique identifier within a registry; the data-record key
    pub name: String,
    /// Display string, independent of `name`
    pub label: String,
    /// Field kind
    pub kind: FieldKind,
    /// Whether a value must be provided at submit time
    #[serde(default)]
    pub required: bool,
    /// Selectable choices; non-empty exactly when the kind demands it
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Name of a registered validator function, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validator: Option<String>,
}

impl FieldDescriptor {
    /// Create a descriptor with no options, not required, no validator
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            required: false,
            options: Vec::new(),
            validator: None,
        }
    }

    /// Create a text field
    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    /// Create an email field
    pub fn email(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Email)
    }

    /// Create a number field
    pub fn number(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Number)
    }

    /// Create a password field
    pub fn password(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Password)
    }

    /// Create a radio field over the given options
    pub fn radio(
        name: impl Into<String>,
        label: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let mut field = Self::new(name, label, FieldKind::Radio);
        field.options = options.into_iter().map(Into::into).collect();
        field
    }

    /// Create a checkbox field over the given options
    pub fn checkbox(
        name: impl Into<String>,
        label: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let mut field = Self::new(name, label, FieldKind::Checkbox);
        field.options = options.into_iter().map(Into::into).collect();
        field
    }

    /// Mark the field as required
    pub fn require(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attach a named validator
    pub fn with_validator(mut self, validator: impl Into<String>) -> Self {
        self.validator = Some(validator.into());
        self
    }

    /// Validates the descriptor itself (not a submitted value).
    ///
    /// Name and label must be non-empty; option-backed kinds must carry
    /// at least one option.
    pub fn check(&self) -> SchemaResult<()> {
        if self.name.is_empty() {
            return Err(SchemaError::EmptyFieldName);
        }
        if self.label.is_empty() {
            return Err(SchemaError::EmptyFieldLabel {
                name: self.name.clone(),
            });
        }
        if self.kind.requires_options() && self.options.is_empty() {
            return Err(SchemaError::MissingOptions {
                name: self.name.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(FieldKind::Text.kind_name(), "text");
        assert_eq!(FieldKind::Email.kind_name(), "email");
        assert_eq!(FieldKind::Number.kind_name(), "number");
        assert_eq!(FieldKind::Password.kind_name(), "password");
        assert_eq!(FieldKind::Radio.kind_name(), "radio");
        assert_eq!(FieldKind::Checkbox.kind_name(), "checkbox");
    }

    #[test]
    fn test_only_option_kinds_require_options() {
        assert!(FieldKind::Radio.requires_options());
        assert!(FieldKind::Checkbox.requires_options());
        assert!(!FieldKind::Text.requires_options());
        assert!(!FieldKind::Number.requires_options());
    }

    #[test]
    fn test_checkbox_is_not_text_valued() {
        assert!(!FieldKind::Checkbox.is_text_valued());
        assert!(FieldKind::Radio.is_text_valued());
        assert!(FieldKind::Password.is_text_valued());
    }

    #[test]
    fn test_well_formed_descriptor_passes_check() {
        let field = FieldDescriptor::email("email", "Email")
            .require()
            .with_validator("email_format");
        assert!(field.check().is_ok());
        assert!(field.required);
        assert_eq!(field.validator.as_deref(), Some("email_format"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let field = FieldDescriptor::text("", "Label");
        assert_eq!(field.check(), Err(SchemaError::EmptyFieldName));
    }

    #[test]
    fn test_empty_label_rejected() {
        let field = FieldDescriptor::text("name", "");
        assert_eq!(
            field.check(),
            Err(SchemaError::EmptyFieldLabel { name: "name".into() })
        );
    }

    #[test]
    fn test_radio_without_options_rejected() {
        let field = FieldDescriptor::new("gender", "Gender", FieldKind::Radio);
        assert_eq!(
            field.check(),
            Err(SchemaError::MissingOptions { name: "gender".into() })
        );
    }

    #[test]
    fn test_text_without_options_is_fine() {
        let field = FieldDescriptor::text("note", "Note");
        assert!(field.check().is_ok());
    }

    #[test]
    fn test_descriptor_json_round_trip() {
        let field = FieldDescriptor::radio(
            "gender",
            "Gender",
            ["Male", "Female", "Non Binary", "Transgender", "Others"],
        )
        .require();
        let json = serde_json::to_string(&field).unwrap();
        let parsed: FieldDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(field, parsed);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&FieldKind::Checkbox).unwrap();
        assert_eq!(json, "\"checkbox\"");
    }

    #[test]
    fn test_descriptor_defaults_on_deserialize() {
        let field: FieldDescriptor =
            serde_json::from_str(r#"{"name":"age","label":"Age","kind":"number"}"#).unwrap();
        assert!(!field.required);
        assert!(field.options.is_empty());
        assert!(field.validator.is_none());
    }
}
