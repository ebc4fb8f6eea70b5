//! Structured JSON logger for formkit
//!
//! - Structured logs (JSON), one line per event
//! - Deterministic key ordering (event, severity, then sorted fields)
//! - Synchronous writes, no buffering
//! - Pluggable sink so tests can capture output

use std::io::{self, Write};
use std::fmt;

use super::events::Event;

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Debug-level detail
    Trace = 0,
    /// Normal operations
    Info = 1,
    /// Rejected input, recoverable
    Warn = 2,
    /// Operation failures
    Error = 3,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A structured logger writing JSON lines to an owned sink.
pub struct Logger {
    sink: Box<dyn Write + Send>,
}

impl Logger {
    /// Logger writing to the given sink.
    pub fn new(sink: Box<dyn Write + Send>) -> Self {
        Self { sink }
    }

    /// Logger writing to stderr, the default for CLI use.
    pub fn stderr() -> Self {
        Self::new(Box::new(io::stderr()))
    }

    /// Logs one event with the given severity and fields.
    ///
    /// Fields are output in deterministic order (alphabetical by key)
    /// after the fixed `event` and `severity` keys.
    pub fn log(&mut self, severity: Severity, event: Event, fields: &[(&str, &str)]) {
        let mut line = String::with_capacity(128);

        line.push_str("{\"event\":\"");
        line.push_str(event.as_str());
        line.push_str("\",\"severity\":\"");
        line.push_str(severity.as_str());
        line.push('"');

        let mut sorted: Vec<_> = fields.iter().collect();
        sorted.sort_by_key(|(key, _)| *key);

        for (key, value) in sorted {
            line.push_str(",\"");
            escape_json_string(&mut line, key);
            line.push_str("\":\"");
            escape_json_string(&mut line, value);
            line.push('"');
        }

        line.push('}');
        line.push('\n');

        // One write, immediately flushed; sink failures never propagate
        let _ = self.sink.write_all(line.as_bytes());
        let _ = self.sink.flush();
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").finish_non_exhaustive()
    }
}

/// Escape special characters for JSON strings
fn escape_json_string(output: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c.is_control() => {
                output.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => output.push(c),
        }
    }
}
