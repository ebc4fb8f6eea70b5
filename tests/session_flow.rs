//! Form Session & API Flow Tests
//!
//! - Editing accumulates values; checks run only at submit
//! - A rejected submit puts the report on display and editing resumes
//! - Acceptance hands the record downstream without resetting the form
//! - The staging draft commits atomically and resets only on success
//! - The JSON boundary preserves all of the above

use std::io;

use formkit::api::{ApiHandler, Response};
use formkit::observability::Logger;
use formkit::record::InputEvent;
use formkit::schema::{FieldDescriptor, FieldKind, SchemaError};
use formkit::session::{FormSession, SessionState, SubmitOutcome};
use formkit::validate::ValidatorRegistry;

// =============================================================================
// Helper Functions
// =============================================================================

fn starter_session() -> FormSession {
    FormSession::starter()
}

fn quiet_handler() -> ApiHandler {
    ApiHandler::with_logger(FormSession::starter(), Logger::new(Box::new(io::sink())))
}

fn fill_valid(session: &mut FormSession) {
    session.handle_change(&InputEvent::text("fullName", "Ada Lovelace"));
    session.handle_change(&InputEvent::text("email", "ada@example.com"));
    session.handle_change(&InputEvent::text("password", "correct horse"));
    session.handle_change(&InputEvent::text("gender", "Others"));
    session.handle_change(&InputEvent::toggle("terms", true));
}

// =============================================================================
// State Machine Tests
// =============================================================================

/// A fresh session is editing with nothing entered and nothing failed.
#[test]
fn test_fresh_session_state() {
    let session = starter_session();
    assert_eq!(session.state(), SessionState::Editing);
    assert!(session.record().is_empty());
    assert!(session.errors().is_empty());
}

/// Submit on an untouched form rejects with one error per required
/// field and moves to Rejected.
#[test]
fn test_submit_untouched_form_rejects() {
    let mut session = starter_session();
    let SubmitOutcome::Rejected(report) = session.submit() else {
        panic!("expected rejection");
    };
    assert_eq!(session.state(), SessionState::Rejected);
    assert_eq!(report.len(), 5); // all but the optional age field
}

/// Correcting input after a rejection returns the machine to Editing;
/// resubmitting with good values accepts.
#[test]
fn test_reject_edit_resubmit_cycle() {
    let mut session = starter_session();
    session.submit();
    assert_eq!(session.state(), SessionState::Rejected);

    fill_valid(&mut session);
    assert_eq!(session.state(), SessionState::Editing);

    let SubmitOutcome::Accepted(record) = session.submit() else {
        panic!("expected acceptance");
    };
    assert_eq!(session.state(), SessionState::Accepted);
    assert_eq!(record.len(), 5);
    assert!(session.errors().is_empty());
}

/// Acceptance hands the record downstream and keeps the form's values.
#[test]
fn test_acceptance_does_not_reset_form() {
    let mut session = starter_session();
    fill_valid(&mut session);

    let SubmitOutcome::Accepted(accepted) = session.submit() else {
        panic!("expected acceptance");
    };
    assert_eq!(&accepted, session.record());
    assert!(session.record().contains("fullName"));
}

/// Validation runs only at submit: invalid intermediate values draw no
/// errors while editing.
#[test]
fn test_no_live_validation_while_editing() {
    let mut session = starter_session();
    session.handle_change(&InputEvent::text("email", "not-an-email"));
    assert!(session.errors().is_empty());
    assert_eq!(session.state(), SessionState::Editing);
}

/// The rejection report is rebuilt wholesale: an error fixed between
/// submits disappears from the next report.
#[test]
fn test_report_rebuilt_not_merged() {
    let mut session = starter_session();
    session.submit();
    assert!(session.errors().contains("fullName"));

    fill_valid(&mut session);
    session.handle_change(&InputEvent::text("email", "still-bad"));
    let SubmitOutcome::Rejected(report) = session.submit() else {
        panic!("expected rejection");
    };
    assert!(!report.contains("fullName"));
    assert_eq!(report.get("email"), Some("Invalid email format"));
    assert_eq!(report.len(), 1);
}

// =============================================================================
// Schema Mutation During a Session
// =============================================================================

/// Removing a field mid-session clears its value and any stale error.
#[test]
fn test_remove_field_mid_session() {
    let mut session = starter_session();
    session.submit();
    assert!(session.errors().contains("gender"));

    assert!(session.remove_field("gender"));
    assert!(!session.errors().contains("gender"));
    assert!(!session.record().contains("gender"));

    // Remaining required fields still gate acceptance
    let SubmitOutcome::Rejected(report) = session.submit() else {
        panic!("expected rejection");
    };
    assert!(!report.contains("gender"));
}

/// A field added mid-session participates in the next pass.
#[test]
fn test_added_field_participates_immediately() {
    let mut session = starter_session();
    fill_valid(&mut session);
    session
        .add_field(FieldDescriptor::text("company", "Company").require())
        .unwrap();

    let SubmitOutcome::Rejected(report) = session.submit() else {
        panic!("expected rejection");
    };
    assert_eq!(report.get("company"), Some("Company is required"));

    session.handle_change(&InputEvent::text("company", "Analytical Engines Ltd"));
    assert!(matches!(session.submit(), SubmitOutcome::Accepted(_)));
}

// =============================================================================
// Staging Draft Tests
// =============================================================================

/// Filling and committing the draft appends the field and resets the
/// draft to its defaults.
#[test]
fn test_draft_commit_appends_and_resets() {
    let mut session = starter_session();
    let before = session.fields().len();

    let draft = session.draft_mut();
    draft.name = "phone".into();
    draft.label = "Phone".into();
    draft.kind = FieldKind::Number;
    session.commit_draft().unwrap();

    assert_eq!(session.fields().len(), before + 1);
    assert_eq!(session.fields().last().unwrap().name, "phone");
    assert!(session.draft().name.is_empty());
    assert_eq!(session.draft().kind, FieldKind::Text);
    assert!(!session.draft().required);
}

/// A draft missing its label is rejected; the schema and the draft both
/// stay as they were.
#[test]
fn test_draft_rejection_preserves_everything() {
    let mut session = starter_session();
    let before = session.fields().len();

    session.draft_mut().name = "phone".into();
    let result = session.commit_draft();

    assert_eq!(
        result,
        Err(SchemaError::EmptyFieldLabel { name: "phone".into() })
    );
    assert_eq!(session.fields().len(), before);
    assert_eq!(session.draft().name, "phone");
}

/// A draft duplicating an existing name is rejected the same way.
#[test]
fn test_draft_duplicate_name_rejected() {
    let mut session = starter_session();
    let draft = session.draft_mut();
    draft.name = "email".into();
    draft.label = "Email Again".into();

    assert_eq!(
        session.commit_draft(),
        Err(SchemaError::DuplicateField { name: "email".into() })
    );
}

// =============================================================================
// API Boundary Tests
// =============================================================================

/// The full scripted flow over the wire: reject, correct, accept.
#[test]
fn test_api_reject_correct_accept() {
    let mut handler = quiet_handler();

    for request in [
        r#"{"op":"update_value","name":"fullName","value":"Ada Lovelace"}"#,
        r#"{"op":"update_value","name":"email","value":"not-an-email"}"#,
        r#"{"op":"update_value","name":"password","value":"correct horse"}"#,
        r#"{"op":"update_value","name":"gender","value":"Others"}"#,
        r#"{"op":"update_value","name":"terms","checked":true}"#,
    ] {
        assert!(handler.handle(request).is_success());
    }

    let Response::Ok { data } = handler.handle(r#"{"op":"submit"}"#) else {
        panic!("expected ok envelope");
    };
    assert_eq!(data["accepted"], false);
    assert_eq!(data["errors"]["email"], "Invalid email format");

    handler.handle(r#"{"op":"update_value","name":"email","value":"ada@example.com"}"#);
    let Response::Ok { data } = handler.handle(r#"{"op":"submit"}"#) else {
        panic!("expected ok envelope");
    };
    assert_eq!(data["accepted"], true);
    assert_eq!(data["data"]["email"], "ada@example.com");
}

/// Schema edits over the wire keep their stable error codes.
#[test]
fn test_api_schema_error_codes() {
    let mut handler = quiet_handler();

    let Response::Error { code, .. } =
        handler.handle(r#"{"op":"add_field","field":{"name":"","label":"X","kind":"text"}}"#)
    else {
        panic!("expected error envelope");
    };
    assert_eq!(code, "FORM_EMPTY_FIELD_NAME");

    let Response::Error { code, .. } = handler
        .handle(r#"{"op":"add_field","field":{"name":"email","label":"Email","kind":"email"}}"#)
    else {
        panic!("expected error envelope");
    };
    assert_eq!(code, "FORM_DUPLICATE_FIELD");
}

/// Add then remove over the wire round-trips the fields listing.
#[test]
fn test_api_add_remove_fields_round_trip() {
    let mut handler = quiet_handler();

    assert!(handler
        .handle(r#"{"op":"add_field","field":{"name":"phone","label":"Phone","kind":"number"}}"#)
        .is_success());

    let Response::Ok { data } = handler.handle(r#"{"op":"fields"}"#) else {
        panic!("expected ok envelope");
    };
    let names: Vec<_> = data["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names.last().map(String::as_str), Some("phone"));

    let Response::Ok { data } = handler.handle(r#"{"op":"remove_field","name":"phone"}"#) else {
        panic!("expected ok envelope");
    };
    assert_eq!(data["removed"], true);

    let Response::Ok { data } = handler.handle(r#"{"op":"fields"}"#) else {
        panic!("expected ok envelope");
    };
    assert!(data["fields"]
        .as_array()
        .unwrap()
        .iter()
        .all(|f| f["name"] != "phone"));
}
