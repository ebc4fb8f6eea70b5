//! CLI error types

use std::path::PathBuf;

use thiserror::Error;

use crate::schema::SchemaError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced by the command-line interface
#[derive(Debug, Error)]
pub enum CliError {
    /// A schema or data file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A schema or data file held malformed JSON
    #[error("Invalid JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The schema file violated a registry invariant
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Validation rejected the data record
    #[error("Validation rejected {count} field(s)")]
    Rejected { count: usize },
}
