//! Form session subsystem for formkit
//!
//! Ties the schema, record, and validation subsystems into one
//! submission flow: values accumulate while editing, a submit runs the
//! engine synchronously, and the outcome either hands the accepted
//! record downstream or puts the error report on display.

mod draft;
mod form;

pub use draft::FieldDraft;
pub use form::{FormSession, SessionState, SubmitOutcome};
