//! The working data record

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::schema::FieldKind;

use super::value::{FieldValue, InputEvent};

/// The values entered so far, keyed by field name.
///
/// A key appears only once its field has received an input event; an
/// untouched field is absent, which the validation engine treats as
/// missing rather than as an error by itself. Keys iterate in sorted
/// order so serialized records are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataRecord {
    values: BTreeMap<String, FieldValue>,
}

impl DataRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the coerced scalar for one input event.
    ///
    /// Runs on every keystroke/toggle; performs no required or validator
    /// checks — those run only at submit time.
    pub fn apply_input(&mut self, kind: FieldKind, event: &InputEvent) {
        self.values
            .insert(event.name.clone(), FieldValue::from_input(kind, event));
    }

    /// Stores a value directly under the given name.
    pub fn set(&mut self, name: impl Into<String>, value: FieldValue) {
        self.values.insert(name.into(), value);
    }

    /// Returns the value entered for a field, if any.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Drops the value entered for a field, if any.
    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.values.remove(name)
    }

    /// Whether any value has been entered for a field.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Iterates entries in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.values.iter()
    }

    /// Returns the number of entered values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether no value has been entered yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
