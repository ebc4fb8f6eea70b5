//! Validation subsystem for formkit
//!
//! # Design Principles
//!
//! - Submitted-value failures are returned as data, never raised
//! - The report is rebuilt wholesale per pass; emptiness is validity
//! - At most one message per field per pass (required wins)
//! - A misbehaving validator is isolated to its own field

mod engine;
mod report;
mod validators;

pub use engine::ValidationEngine;
pub use report::ErrorReport;
pub use validators::{ValidatorFn, ValidatorRegistry};
