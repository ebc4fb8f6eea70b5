//! Named validator registry
//!
//! Validators are pure functions from a field value to confirmation or
//! a rejection message. Descriptors reference them by name, which keeps
//! schemas serializable and inspectable instead of carrying opaque
//! function values.

use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};

use regex::Regex;

use crate::record::FieldValue;

/// Message used when a validator cannot produce a verdict of its own
/// (unknown name, or the function panicked).
const GENERIC_FAILURE: &str = "Validation failed";

/// A registered validation function.
pub type ValidatorFn = Box<dyn Fn(&FieldValue) -> Result<(), String> + Send + Sync>;

/// Registry of named pure validator functions.
pub struct ValidatorRegistry {
    validators: HashMap<String, ValidatorFn>,
}

impl ValidatorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            validators: HashMap::new(),
        }
    }

    /// Creates a registry with the built-in validators registered.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("email_format", email_format());
        registry
    }

    /// Registers a validator under a name, replacing any previous one.
    pub fn register(&mut self, name: impl Into<String>, validator: ValidatorFn) {
        self.validators.insert(name.into(), validator);
    }

    /// Whether a validator is registered under the name.
    pub fn contains(&self, name: &str) -> bool {
        self.validators.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.validators.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Runs a named validator against a value.
    ///
    /// Never aborts the caller's pass: an unknown name or a panicking
    /// function yields a generic rejection for the field instead of
    /// propagating.
    pub fn run(&self, name: &str, value: &FieldValue) -> Result<(), String> {
        let Some(validator) = self.validators.get(name) else {
            return Err(GENERIC_FAILURE.to_string());
        };
        match catch_unwind(AssertUnwindSafe(|| validator(value))) {
            Ok(result) => result,
            Err(_) => Err(GENERIC_FAILURE.to_string()),
        }
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl std::fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("names", &self.names())
            .finish()
    }
}

/// Builtin: accepts addresses of the shape `local@domain.tld`.
fn email_format() -> ValidatorFn {
    let pattern = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static pattern is valid");
    Box::new(move |value| match value.as_text() {
        Some(text) if pattern.is_match(text) => Ok(()),
        _ => Err("Invalid email format".to_string()),
    })
}
