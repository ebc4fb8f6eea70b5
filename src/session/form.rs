//! One form-filling session
//!
//! The session owns the schema registry, the validator registry, the
//! working data record, and the last error report. It is mutated only
//! in response to serialized user events; nothing here blocks, suspends,
//! or performs I/O.

use crate::record::{DataRecord, InputEvent};
use crate::schema::{FieldDescriptor, SchemaError, SchemaRegistry, SchemaResult};
use crate::validate::{ErrorReport, ValidationEngine, ValidatorFn, ValidatorRegistry};

use super::draft::FieldDraft;

/// Submission flow state.
///
/// Validation runs synchronously inside `submit`; there is no stored
/// in-flight state. After a rejection the report stays on display and
/// the next input returns the machine to `Editing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Editing,
    Accepted,
    Rejected,
}

/// Result of one submit action.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Every check passed. Carries the accepted record for the
    /// downstream consumer; the session does not reset the form.
    Accepted(DataRecord),
    /// At least one field failed; the report is the display state.
    Rejected(ErrorReport),
}

/// A form session: one schema, one record, one submission flow.
#[derive(Debug)]
pub struct FormSession {
    schema: SchemaRegistry,
    validators: ValidatorRegistry,
    record: DataRecord,
    errors: ErrorReport,
    state: SessionState,
    draft: FieldDraft,
}

impl FormSession {
    /// Creates a session over the given initial fields.
    ///
    /// Fails if any descriptor is malformed or references a validator
    /// that is not registered; nothing is partially applied.
    pub fn new(
        initial: Vec<FieldDescriptor>,
        validators: ValidatorRegistry,
    ) -> SchemaResult<Self> {
        let mut schema = SchemaRegistry::empty();
        for field in initial {
            check_validator_known(&validators, &field)?;
            schema.add_field(field)?;
        }
        Ok(Self {
            schema,
            validators,
            record: DataRecord::new(),
            errors: ErrorReport::new(),
            state: SessionState::Editing,
            draft: FieldDraft::default(),
        })
    }

    /// Session over the built-in demonstration form and builtin validators.
    pub fn starter() -> Self {
        Self::new(crate::schema::starter_fields(), ValidatorRegistry::with_builtins())
            .expect("starter fields are well-formed")
    }

    /// Stores one input event in the working record.
    ///
    /// Events naming a field that is not (or no longer) in the schema
    /// are dropped. No checks run here; validation happens at submit.
    pub fn handle_change(&mut self, event: &InputEvent) {
        let Some(kind) = self.schema.get(&event.name).map(|field| field.kind) else {
            return;
        };
        self.record.apply_input(kind, event);
        self.state = SessionState::Editing;
    }

    /// Appends a field, enforcing the registry invariants plus the
    /// known-validator rule. The schema is unchanged on failure.
    pub fn add_field(&mut self, field: FieldDescriptor) -> SchemaResult<()> {
        check_validator_known(&self.validators, &field)?;
        self.schema.add_field(field)
    }

    /// Removes a field along with any value or error recorded under its
    /// name. Idempotent; returns whether a field was actually removed.
    pub fn remove_field(&mut self, name: &str) -> bool {
        let removed = self.schema.remove_field(name);
        self.record.remove(name);
        self.errors.remove(name);
        removed
    }

    /// Validates the current record and resolves the submission.
    ///
    /// An empty report accepts: the outcome hands the record to the
    /// caller and the form keeps its values. A non-empty report rejects:
    /// it becomes the session's display state until the user edits and
    /// resubmits.
    pub fn submit(&mut self) -> SubmitOutcome {
        let engine = ValidationEngine::new(&self.validators);
        let report = engine.validate(&self.schema, &self.record);
        if report.is_empty() {
            self.errors = ErrorReport::new();
            self.state = SessionState::Accepted;
            SubmitOutcome::Accepted(self.record.clone())
        } else {
            self.errors = report.clone();
            self.state = SessionState::Rejected;
            SubmitOutcome::Rejected(report)
        }
    }

    /// Replaces the working record wholesale, e.g. to validate an
    /// externally submitted payload against this session's schema.
    pub fn set_record(&mut self, record: DataRecord) {
        self.record = record;
        self.state = SessionState::Editing;
    }

    /// Registers an additional validator for this session's fields.
    pub fn register_validator(&mut self, name: impl Into<String>, validator: ValidatorFn) {
        self.validators.register(name, validator);
    }

    /// The staging draft for the next field.
    pub fn draft(&self) -> &FieldDraft {
        &self.draft
    }

    /// Mutable access for the operator filling the draft in.
    pub fn draft_mut(&mut self) -> &mut FieldDraft {
        &mut self.draft
    }

    /// Commits the staged draft as a new field.
    ///
    /// The draft resets to its defaults only on success; a rejected
    /// draft stays as entered so the operator can correct it.
    pub fn commit_draft(&mut self) -> SchemaResult<()> {
        let field = self.draft.to_descriptor();
        self.add_field(field)?;
        self.draft.reset();
        Ok(())
    }

    /// The live ordered field sequence.
    pub fn fields(&self) -> &[FieldDescriptor] {
        self.schema.fields()
    }

    /// The values entered so far.
    pub fn record(&self) -> &DataRecord {
        &self.record
    }

    /// The last validation report (empty until a submit fails).
    pub fn errors(&self) -> &ErrorReport {
        &self.errors
    }

    /// Current submission flow state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the last pass found no failures — derived from the
    /// report, never tracked separately.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

fn check_validator_known(
    validators: &ValidatorRegistry,
    field: &FieldDescriptor,
) -> SchemaResult<()> {
    if let Some(validator) = &field.validator {
        if !validators.contains(validator) {
            return Err(SchemaError::UnknownValidator {
                name: field.name.clone(),
                validator: validator.clone(),
            });
        }
    }
    Ok(())
}
