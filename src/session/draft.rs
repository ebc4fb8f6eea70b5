//! Field-addition staging
//!
//! A mutable draft the operator fills in before committing a new field.
//! The draft resets to its defaults only after a successful commit; a
//! rejected commit leaves both the draft and the schema untouched.

use crate::schema::{FieldDescriptor, FieldKind};

/// A draft descriptor being assembled by the operator.
///
/// Defaults: text kind, not required, everything else empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDraft {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub options: Vec<String>,
    pub validator: Option<String>,
}

impl Default for FieldDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            label: String::new(),
            kind: FieldKind::Text,
            required: false,
            options: Vec::new(),
            validator: None,
        }
    }
}

impl FieldDraft {
    /// Returns the draft to its defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Builds the descriptor this draft describes.
    ///
    /// The result still goes through the registry's checks on commit;
    /// building never fails.
    pub fn to_descriptor(&self) -> FieldDescriptor {
        FieldDescriptor {
            name: self.name.clone(),
            label: self.label.clone(),
            kind: self.kind,
            required: self.required,
            options: self.options.clone(),
            validator: self.validator.clone(),
        }
    }
}
