//! Entered values and raw input events

use serde::{Deserialize, Serialize};

use crate::schema::FieldKind;

/// A single entered value.
///
/// Text-valued kinds store the raw string exactly as typed — the core
/// performs no numeric parsing or trimming. Checkbox fields store the
/// toggle's checked state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Toggle(bool),
    Text(String),
}

impl FieldValue {
    /// Create a text value
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Create a toggle value
    pub fn toggle(checked: bool) -> Self {
        FieldValue::Toggle(checked)
    }

    /// Computes the scalar to store for one input event.
    ///
    /// Checkbox fields take the event's checked state; every other kind
    /// takes the raw value string as typed.
    pub fn from_input(kind: FieldKind, event: &InputEvent) -> Self {
        match kind {
            FieldKind::Checkbox => FieldValue::Toggle(event.checked),
            _ => FieldValue::Text(event.value.clone()),
        }
    }

    /// Whether this value counts as provided.
    ///
    /// A string counts once non-empty, so the string "0" in a number
    /// field is provided. A toggle counts only when set: an unchecked
    /// consent box is not a provided consent.
    pub fn is_provided(&self) -> bool {
        match self {
            FieldValue::Text(value) => !value.is_empty(),
            FieldValue::Toggle(checked) => *checked,
        }
    }

    /// Returns the string content for text-valued entries
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value),
            FieldValue::Toggle(_) => None,
        }
    }

    /// Returns the checked state for toggle entries
    pub fn as_toggle(&self) -> Option<bool> {
        match self {
            FieldValue::Toggle(checked) => Some(*checked),
            FieldValue::Text(_) => None,
        }
    }
}

/// One raw input event from a form control.
///
/// Mirrors what a control change carries: the control name, its current
/// value string, and its checked state. Which of the two is stored
/// depends on the field's kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputEvent {
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub checked: bool,
}

impl InputEvent {
    /// An event carrying typed text (or a selected option string)
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            checked: false,
        }
    }

    /// An event carrying a toggle's checked state
    pub fn toggle(name: impl Into<String>, checked: bool) -> Self {
        Self {
            name: name.into(),
            value: String::new(),
            checked,
        }
    }
}
