//! JSON timeline writer.
//!
//! Writes the aggregated entries as an indented JSON array.

use crate::parser::{AggregateResult, LogEntry};
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Write aggregated entries to a JSON file
///
/// **Public** - JSON half of the report
///
/// # Arguments
/// * `result` - Sorted entries to write
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_results(
    result: &AggregateResult,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing {} entries to: {}", result.len(), output_path.display());

    let json = serde_json::to_vec_pretty(result)?;
    super::write_atomic(output_path, &json)?;

    debug!("JSON written ({} bytes)", json.len());

    Ok(())
}

/// Read a previously written timeline back
///
/// **Public** - useful for validation and testing
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_results(input_path: impl AsRef<Path>) -> Result<Vec<LogEntry>, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading results from: {}", input_path.display());

    let file = File::open(input_path)?;
    let entries: Vec<LogEntry> = serde_json::from_reader(BufReader::new(file))?;

    Ok(entries)
}
