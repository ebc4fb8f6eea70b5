//! CLI command dispatch
//!
//! Envelopes go to stdout; logs and error summaries go to stderr. A
//! rejected validation exits non-zero so scripts can gate on it.

use std::path::Path;

use serde_json::json;

use crate::api::ApiHandler;
use crate::session::{FormSession, SubmitOutcome};
use crate::validate::ValidatorRegistry;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io;

/// Parse arguments and run the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Fields { schema } => fields(&schema),
        Command::Check { schema } => check(&schema),
        Command::Validate { schema, data } => validate(&schema, &data),
        Command::Demo => demo(),
    }
}

/// Print the ordered field sequence a schema file declares.
fn fields(schema_path: &Path) -> CliResult<()> {
    let session = load_session(schema_path)?;
    let listing = serde_json::to_string_pretty(&json!({ "fields": session.fields() }))
        .expect("field serialization cannot fail");
    println!("{}", listing);
    Ok(())
}

/// Check a schema file against the registry invariants.
fn check(schema_path: &Path) -> CliResult<()> {
    let session = load_session(schema_path)?;
    println!(
        "{}",
        json!({ "checked": true, "fields": session.fields().len() })
    );
    Ok(())
}

/// Validate a data record file against a schema file.
fn validate(schema_path: &Path, data_path: &Path) -> CliResult<()> {
    let mut session = load_session(schema_path)?;
    session.set_record(io::read_record(data_path)?);

    match session.submit() {
        SubmitOutcome::Accepted(record) => {
            println!("{}", json!({ "accepted": true, "data": record }));
            Ok(())
        }
        SubmitOutcome::Rejected(report) => {
            println!("{}", json!({ "accepted": false, "errors": report }));
            Err(CliError::Rejected { count: report.len() })
        }
    }
}

/// Walk the built-in demonstration form through a scripted session:
/// a submit that fails, the correction, and the accepting resubmit.
fn demo() -> CliResult<()> {
    let mut handler = ApiHandler::new(FormSession::starter());

    let script = [
        r#"{"op":"fields"}"#,
        r#"{"op":"update_value","name":"fullName","value":"Ada Lovelace"}"#,
        r#"{"op":"update_value","name":"email","value":"not-an-email"}"#,
        r#"{"op":"update_value","name":"password","value":"correct horse"}"#,
        r#"{"op":"update_value","name":"gender","value":"Others"}"#,
        r#"{"op":"update_value","name":"terms","checked":true}"#,
        r#"{"op":"submit"}"#,
        r#"{"op":"update_value","name":"email","value":"ada@example.com"}"#,
        r#"{"op":"submit"}"#,
    ];

    for request in script {
        println!("> {}", request);
        println!("{}", handler.handle(request).to_json());
    }
    Ok(())
}

/// Builds a session over a schema file and the builtin validators.
fn load_session(schema_path: &Path) -> CliResult<FormSession> {
    let fields = io::read_fields(schema_path)?;
    Ok(FormSession::new(fields, ValidatorRegistry::with_builtins())?)
}
