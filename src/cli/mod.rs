//! Command-line interface for formkit

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::run;
pub use errors::{CliError, CliResult};
