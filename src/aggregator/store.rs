//! Log directory access: finding profiler logs and wiping them.

use crate::utils::error::AggregateError;
use log::{debug, info};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// List regular files in `directory` whose names contain `marker`
///
/// **Public** - first step of aggregation
///
/// A missing directory is not an error and yields an empty list.
/// Paths are returned sorted so processing order is deterministic.
///
/// # Errors
/// * `AggregateError::Discovery` - The directory exists but cannot be listed
pub fn discover(directory: &Path, marker: &str) -> Result<Vec<PathBuf>, AggregateError> {
    let discovery_error = |source| AggregateError::Discovery {
        path: directory.to_path_buf(),
        source,
    };

    let entries = match fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("Log directory {} does not exist", directory.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(discovery_error(e)),
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(discovery_error)?;
        let path = entry.path();

        let matches_marker = entry.file_name().to_string_lossy().contains(marker);
        if matches_marker && path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    debug!(
        "Found {} log files in {}",
        files.len(),
        directory.display()
    );

    Ok(files)
}

/// Remove the log directory and everything in it
///
/// **Public** - used by `--reset` and after a successful graph
///
/// No-op when the directory does not exist.
pub fn clear(directory: &Path) -> std::io::Result<()> {
    match fs::remove_dir_all(directory) {
        Ok(()) => {
            info!("Deleted profiler logs in {}", directory.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_missing_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("nope");

        assert!(discover(&missing, "pid_").unwrap().is_empty());
    }

    #[test]
    fn test_discover_skips_directories_with_marker() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("toolchain_profiler.pid_1")).unwrap();
        fs::write(temp_dir.path().join("toolchain_profiler.pid_2.json"), "").unwrap();

        let files = discover(temp_dir.path(), "toolchain_profiler.pid_").unwrap();
        assert_eq!(files, vec![temp_dir.path().join("toolchain_profiler.pid_2.json")]);
    }

    #[test]
    fn test_clear_twice() {
        let temp_dir = tempfile::tempdir().unwrap();
        let logs = temp_dir.path().join("logs");
        fs::create_dir_all(logs.join("nested")).unwrap();
        fs::write(logs.join("nested/a.json"), "{}").unwrap();

        clear(&logs).unwrap();
        assert!(!logs.exists());
        clear(&logs).unwrap();
    }
}
