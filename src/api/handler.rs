//! API handler for formkit
//!
//! Owns one form session and dispatches parsed requests against it.
//! Mutations are serialized by exclusive ownership (`&mut self`); no
//! lock is needed. Data-validation failures are payload, not protocol
//! errors: a submit that fails checks still answers `status: ok` with
//! `accepted: false`.

use serde_json::{json, Value};

use crate::observability::{Event, Logger, Severity};
use crate::record::InputEvent;
use crate::schema::FieldDescriptor;
use crate::session::{FormSession, SubmitOutcome};

use super::errors::{ApiError, ApiResult};
use super::request::Request;
use super::response::Response;

/// API handler driving one form session.
pub struct ApiHandler {
    session: FormSession,
    logger: Logger,
}

impl ApiHandler {
    /// Create a handler logging to stderr.
    pub fn new(session: FormSession) -> Self {
        Self::with_logger(session, Logger::stderr())
    }

    /// Create a handler with an explicit logger sink.
    pub fn with_logger(session: FormSession, mut logger: Logger) -> Self {
        logger.log(Severity::Info, Event::SessionStart, &[]);
        Self { session, logger }
    }

    /// Read access to the underlying session.
    pub fn session(&self) -> &FormSession {
        &self.session
    }

    /// Handle a raw JSON request string.
    pub fn handle(&mut self, json_request: &str) -> Response {
        let request = match Request::parse(json_request) {
            Ok(request) => request,
            Err(e) => {
                self.logger
                    .log(Severity::Warn, Event::RequestRejected, &[("code", e.code())]);
                return Response::error(&e);
            }
        };

        let result = match request {
            Request::AddField(field) => self.handle_add_field(field),
            Request::RemoveField { name } => self.handle_remove_field(&name),
            Request::UpdateValue(event) => self.handle_update_value(&event),
            Request::Submit => self.handle_submit(),
            Request::Fields => self.handle_fields(),
        };

        match result {
            Ok(data) => Response::success(data),
            Err(e) => Response::error(&e),
        }
    }

    /// Handle add_field: validate-before-append, schema untouched on
    /// rejection.
    fn handle_add_field(&mut self, field: FieldDescriptor) -> ApiResult<Value> {
        let name = field.name.clone();
        match self.session.add_field(field) {
            Ok(()) => {
                self.logger
                    .log(Severity::Info, Event::FieldAdded, &[("field", &name)]);
                Ok(json!({ "added": name }))
            }
            Err(e) => {
                self.logger.log(
                    Severity::Warn,
                    Event::FieldRejected,
                    &[("code", e.code()), ("field", &name)],
                );
                Err(ApiError::from(e))
            }
        }
    }

    /// Handle remove_field: idempotent, reports whether anything went.
    fn handle_remove_field(&mut self, name: &str) -> ApiResult<Value> {
        let removed = self.session.remove_field(name);
        if removed {
            self.logger
                .log(Severity::Info, Event::FieldRemoved, &[("field", name)]);
        }
        Ok(json!({ "removed": removed }))
    }

    /// Handle update_value: store the coerced scalar, echo the record.
    fn handle_update_value(&mut self, event: &InputEvent) -> ApiResult<Value> {
        self.session.handle_change(event);
        self.logger
            .log(Severity::Trace, Event::ValueUpdated, &[("field", &event.name)]);
        let record = serde_json::to_value(self.session.record())
            .expect("record serialization cannot fail");
        Ok(json!({ "record": record }))
    }

    /// Handle submit: the verdict is data either way.
    fn handle_submit(&mut self) -> ApiResult<Value> {
        match self.session.submit() {
            SubmitOutcome::Accepted(record) => {
                self.logger.log(Severity::Info, Event::SubmitAccepted, &[]);
                Ok(json!({ "accepted": true, "data": record }))
            }
            SubmitOutcome::Rejected(report) => {
                let count = report.len().to_string();
                self.logger
                    .log(Severity::Warn, Event::SubmitRejected, &[("errors", &count)]);
                Ok(json!({ "accepted": false, "errors": report }))
            }
        }
    }

    /// Handle fields: enumerate the live ordered sequence.
    fn handle_fields(&self) -> ApiResult<Value> {
        Ok(json!({ "fields": self.session.fields() }))
    }
}
