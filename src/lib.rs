//! formkit - A strict, deterministic, dynamic form engine
//!
//! Callers declare an ordered list of typed fields at runtime, feed in
//! values as they are entered, and receive a structured per-field error
//! report at submit time.

pub mod api;
pub mod cli;
pub mod observability;
pub mod record;
pub mod schema;
pub mod session;
pub mod validate;
