//! Ordered field registry
//!
//! Insertion order is display and validation order. The registry is a
//! plain in-memory value owned by one form session; it is mutated only
//! via `add_field` / `remove_field`, and a rejected mutation leaves the
//! sequence untouched.

use super::errors::{SchemaError, SchemaResult};
use super::types::FieldDescriptor;

/// The ordered collection of field descriptors currently active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaRegistry {
    fields: Vec<FieldDescriptor>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a registry from a caller-supplied initial set.
    ///
    /// Every descriptor passes the same checks as `add_field`; the first
    /// violation fails construction.
    pub fn new(initial: Vec<FieldDescriptor>) -> SchemaResult<Self> {
        let mut registry = Self::empty();
        for field in initial {
            registry.add_field(field)?;
        }
        Ok(registry)
    }

    /// Appends a descriptor to the end of the sequence.
    ///
    /// Rejects empty names/labels, missing options, and name collisions;
    /// a rejected descriptor changes nothing.
    pub fn add_field(&mut self, field: FieldDescriptor) -> SchemaResult<()> {
        field.check()?;
        if self.contains(&field.name) {
            return Err(SchemaError::DuplicateField {
                name: field.name.clone(),
            });
        }
        self.fields.push(field);
        Ok(())
    }

    /// Removes the descriptor with the given name.
    ///
    /// Idempotent: removing an absent name is a no-op, so repeated
    /// removal requests (e.g. a double-click) are safe. Returns whether
    /// a descriptor was actually removed.
    pub fn remove_field(&mut self, name: &str) -> bool {
        let before = self.fields.len();
        self.fields.retain(|field| field.name != name);
        self.fields.len() != before
    }

    /// Returns the live ordered sequence of descriptors.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Looks up a descriptor by name.
    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Checks whether a field with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether the registry holds no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
