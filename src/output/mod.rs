//! Output writers for aggregated results.
//!
//! This module handles writing data to disk:
//! - JSON timeline of every log entry
//! - HTML report pointing at that timeline

pub mod html;
pub mod json;
pub mod report;

// Re-export main functions
pub use html::{load_template, render_html};
pub use json::{read_results, write_results};
pub use report::{report_paths, write_report, ReportPaths};

use crate::utils::error::OutputError;
use log::debug;
use std::io::Write;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Write `contents` to `path` via a temp file in the same directory
///
/// The target is either fully replaced or left untouched. On Unix the
/// file is created with mode 0666 minus the umask, like `fs::write`.
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), OutputError> {
    validate_path(path)?;

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if !parent.exists() {
        debug!("Creating parent directories: {}", parent.display());
        std::fs::create_dir_all(parent).map_err(|e| {
            OutputError::InvalidPath(format!(
                "Cannot create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }

    let mut file = builder.tempfile_in(parent)?;
    file.write_all(contents)?;
    file.flush()?;
    file.persist(path).map_err(|e| OutputError::WriteFailed(e.error))?;

    Ok(())
}
