//! Form schema subsystem for formkit
//!
//! # Design Principles
//!
//! - Descriptors are immutable once added; edits replace them wholesale
//! - Field names are unique within one registry
//! - Mutations are atomic: a rejected descriptor changes nothing
//! - Option-backed kinds always carry at least one option
//! - Insertion order is display and validation order

mod errors;
mod registry;
mod types;

pub use errors::{SchemaError, SchemaResult};
pub use registry::SchemaRegistry;
pub use types::{FieldDescriptor, FieldKind};

/// The built-in demonstration form.
///
/// Six fields covering every supported kind: identity and contact
/// strings, an optional numeric field, a masked password, a single-pick
/// radio group, and a consent checkbox.
pub fn starter_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::text("fullName", "Full Name").require(),
        FieldDescriptor::email("email", "Email")
            .require()
            .with_validator("email_format"),
        FieldDescriptor::number("age", "Age"),
        FieldDescriptor::password("password", "Password").require(),
        FieldDescriptor::radio(
            "gender",
            "Gender",
            ["Male", "Female", "Non Binary", "Transgender", "Others"],
        )
        .require(),
        FieldDescriptor::checkbox("terms", "Accept Terms", ["Yes"]).require(),
    ]
}
