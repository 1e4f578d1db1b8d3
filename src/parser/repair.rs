//! Best-effort repair of profiler log files.
//!
//! The profiler appends one JSON object per line and never closes the
//! array it opened, so a log file looks like a JSON array with missing
//! brackets and inconsistent commas:
//!
//! ```text
//! [
//! {"time": 1, "cmd": "clang"},
//! {"time": 2, "cmd": "wasm-ld"}
//! ,
//! {"time": 3, "cmd": "wasm-opt"},
//! ```
//!
//! This is not a general JSON repair. Entries spanning several lines
//! are not supported.

use super::schema::LogEntry;
use crate::utils::error::ParseError;
use log::debug;
use serde_json::Value;
use std::path::Path;

/// How a log file is turned back into JSON
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum RepairStrategy {
    /// Parse every entry line independently
    #[default]
    PerLine,
    /// Rebuild one array from all lines and parse it as a whole
    Reconstruct,
}

/// Repair and parse the contents of one log file
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `path` - Log file path, used in error messages only
/// * `content` - Raw file text
/// * `strategy` - Repair algorithm to use
///
/// # Errors
/// * `ParseError::InvalidLine` - A line is not valid JSON (per-line)
/// * `ParseError::InvalidJson` - The rebuilt array is not valid JSON (reconstruct)
/// * `ParseError::MissingTime` - An entry has no scalar `time` field
pub fn repair_and_parse(
    path: &Path,
    content: &str,
    strategy: RepairStrategy,
) -> Result<Vec<LogEntry>, ParseError> {
    let values = match strategy {
        RepairStrategy::PerLine => parse_lines(path, content)?,
        RepairStrategy::Reconstruct => {
            let text = reconstruct_array(content);
            serde_json::from_str::<Vec<Value>>(&text).map_err(|source| {
                ParseError::InvalidJson {
                    path: path.to_path_buf(),
                    source,
                }
            })?
        }
    };

    debug!("{}: {} entries", path.display(), values.len());

    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            LogEntry::from_value(value).ok_or_else(|| ParseError::MissingTime {
                path: path.to_path_buf(),
                entry: index + 1,
            })
        })
        .collect()
}

/// Rebuild a JSON array from near-array text
///
/// Drops bracket-only, comma-only and blank lines, puts a comma after
/// every remaining line except the last, and wraps the result in `[`..`]`.
pub fn reconstruct_array(content: &str) -> String {
    let mut lines: Vec<String> = content
        .lines()
        .filter(|line| !is_filler(line))
        .map(|line| {
            if line.ends_with(',') {
                line.to_string()
            } else {
                format!("{line},")
            }
        })
        .collect();

    if let Some(last) = lines.last_mut() {
        last.pop();
    }

    format!("[{}]", lines.join("\n"))
}

/// Parse each entry line on its own, stripping one trailing comma
///
/// **Private** - internal helper for repair_and_parse
fn parse_lines(path: &Path, content: &str) -> Result<Vec<Value>, ParseError> {
    let mut values = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if is_filler(line) {
            continue;
        }

        let entry = line.strip_suffix(',').unwrap_or(line);
        let value = serde_json::from_str::<Value>(entry).map_err(|source| {
            ParseError::InvalidLine {
                path: path.to_path_buf(),
                line: index + 1,
                source,
            }
        })?;
        values.push(value);
    }

    Ok(values)
}

/// Lines carrying no entry: `[`, `]`, `,` or whitespace
fn is_filler(line: &str) -> bool {
    matches!(line, "[" | "]" | ",") || line.trim().is_empty()
}
