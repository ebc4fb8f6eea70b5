//! Submitted-value validation
//!
//! Validation semantics:
//! - Fields are checked in schema order
//! - The required check runs first; its failure suppresses the custom
//!   validator, so each field carries at most one message per pass
//! - Failures are data (the report), never errors
//! - Deterministic: identical inputs produce identical reports

use crate::record::{DataRecord, FieldValue};
use crate::schema::SchemaRegistry;

use super::report::ErrorReport;
use super::validators::ValidatorRegistry;

/// Validation engine over a validator registry.
///
/// Pure per call: no state is carried between passes, so independent
/// `(schema, record)` pairs may be validated concurrently as long as
/// the schema is not mutated mid-read.
pub struct ValidationEngine<'a> {
    validators: &'a ValidatorRegistry,
}

impl<'a> ValidationEngine<'a> {
    /// Creates an engine backed by the given validator registry.
    pub fn new(validators: &'a ValidatorRegistry) -> Self {
        Self { validators }
    }

    /// Checks a data record against the schema and reports per-field
    /// failures. An empty report signals acceptance.
    ///
    /// A field absent from the record was never interacted with and is
    /// treated as missing, which only matters when it is required.
    pub fn validate(&self, schema: &SchemaRegistry, record: &DataRecord) -> ErrorReport {
        let mut report = ErrorReport::new();

        for field in schema.fields() {
            let value = record.get(&field.name);
            let provided = value.is_some_and(FieldValue::is_provided);

            if field.required && !provided {
                report.insert(&field.name, format!("{} is required", field.label));
                continue;
            }

            if let (Some(validator), Some(value)) = (&field.validator, value) {
                if provided {
                    if let Err(message) = self.validators.run(validator, value) {
                        report.insert(&field.name, message);
                    }
                }
            }
        }

        report
    }
}
