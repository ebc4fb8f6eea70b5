//! Observability subsystem for formkit
//!
//! Typed events plus a structured JSON logger: one log line per event,
//! deterministic key ordering, synchronous writes. The sink is injected
//! so library users and tests decide where lines go.

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};
