//! Observability events for formkit
//!
//! Events are explicit and typed; one log line = one event.

use std::fmt;

/// Observable events in a form session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A session was created
    SessionStart,
    /// A field was appended to the schema
    FieldAdded,
    /// A field descriptor was rejected
    FieldRejected,
    /// A field was removed from the schema
    FieldRemoved,
    /// A value was stored for a field
    ValueUpdated,
    /// A submit passed validation
    SubmitAccepted,
    /// A submit failed validation
    SubmitRejected,
    /// A request could not be parsed or dispatched
    RequestRejected,
}

impl Event {
    /// Returns the event name string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::SessionStart => "session_start",
            Event::FieldAdded => "field_added",
            Event::FieldRejected => "field_rejected",
            Event::FieldRemoved => "field_removed",
            Event::ValueUpdated => "value_updated",
            Event::SubmitAccepted => "submit_accepted",
            Event::SubmitRejected => "submit_rejected",
            Event::RequestRejected => "request_rejected",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
