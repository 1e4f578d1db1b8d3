//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use crate::parser::TimeKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while repairing and parsing a single log file
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to parse JSON file \"{}\" at line {line}: {source}", .path.display())]
    InvalidLine {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse JSON file \"{}\": {source}", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Entry {entry} in \"{}\" is not an object with a scalar `time` field", .path.display())]
    MissingTime { path: PathBuf, entry: usize },
}

/// Errors that can occur while aggregating a log directory
#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("Failed to list log directory {}: {source}", .path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read log file {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(
        "Cannot sort entries: {} has {first_kind} `time` values but {} has {second_kind} ones",
        .first.display(),
        .second.display()
    )]
    MixedTimeKinds {
        first: PathBuf,
        first_kind: TimeKind,
        second: PathBuf,
        second_kind: TimeKind,
    },

    #[error(
        "No profiler logs were found in path: {}.\n\
         Try setting the environment variable EM_PROFILE_TOOLCHAIN=1 and run some build commands, \
         then re-run with --graph.",
        .path.display()
    )]
    EmptyResult { path: PathBuf },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Failed to read template {}: {source}", .path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
