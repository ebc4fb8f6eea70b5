//! CLI argument definitions using clap
//!
//! Commands:
//! - formkit fields --schema <path>
//! - formkit check --schema <path>
//! - formkit validate --schema <path> --data <path>
//! - formkit demo

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// formkit - A strict, deterministic, dynamic form engine
#[derive(Parser, Debug)]
#[command(name = "formkit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the fields a schema file declares
    Fields {
        /// Path to the schema JSON file
        #[arg(long)]
        schema: PathBuf,
    },

    /// Check a schema file against the registry invariants
    Check {
        /// Path to the schema JSON file
        #[arg(long)]
        schema: PathBuf,
    },

    /// Validate a data record file against a schema file
    Validate {
        /// Path to the schema JSON file
        #[arg(long)]
        schema: PathBuf,

        /// Path to the data record JSON file
        #[arg(long)]
        data: PathBuf,
    },

    /// Walk the built-in demonstration form through a scripted session
    Demo,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
