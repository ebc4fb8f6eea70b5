//! File loading helpers for schema and record JSON

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::record::DataRecord;
use crate::schema::FieldDescriptor;

use super::errors::{CliError, CliResult};

/// Reads an ordered field list from a schema JSON file.
pub fn read_fields(path: &Path) -> CliResult<Vec<FieldDescriptor>> {
    read_json(path)
}

/// Reads a data record from a JSON file.
pub fn read_record(path: &Path) -> CliResult<DataRecord> {
    read_json(path)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> CliResult<T> {
    let content = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
