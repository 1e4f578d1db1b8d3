//! Merging every discovered log file into one sorted timeline.

use super::store::discover;
use crate::parser::{repair_and_parse, AggregateResult, LogEntry, RepairStrategy, TimeKind};
use crate::utils::config::{default_log_dir, LOG_FILE_MARKER};
use crate::utils::error::AggregateError;
use log::{debug, info};
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

/// Where to look for logs and how to read them
#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    /// Directory the profiler writes its logs into
    pub log_dir: PathBuf,

    /// File name substring identifying profiler logs
    pub marker: String,

    /// Repair algorithm applied to every file
    pub strategy: RepairStrategy,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            marker: LOG_FILE_MARKER.to_string(),
            strategy: RepairStrategy::default(),
        }
    }
}

impl AggregatorConfig {
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_dir: log_dir.into(),
            ..Default::default()
        }
    }

    pub fn with_strategy(mut self, strategy: RepairStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Collect, repair and sort every profiler log in the configured directory
///
/// **Public** - main entry point for aggregation
///
/// Any file that fails to parse aborts the whole run; nothing is
/// returned for the files that did parse.
///
/// # Errors
/// * `AggregateError::Discovery` - Log directory cannot be listed
/// * `AggregateError::ReadFailed` - A log file cannot be read
/// * `AggregateError::Parse` - A log file cannot be repaired
/// * `AggregateError::MixedTimeKinds` - Numeric and string `time` values mixed
/// * `AggregateError::EmptyResult` - No files or no entries found
pub fn aggregate(config: &AggregatorConfig) -> Result<AggregateResult, AggregateError> {
    let log_files = discover(&config.log_dir, &config.marker)?;

    if !log_files.is_empty() {
        info!(
            "Processing {} profile log files in {}...",
            log_files.len(),
            config.log_dir.display()
        );
    }

    let mut entries = Vec::new();
    let mut first_kind = None;
    for log_file in &log_files {
        info!("Processing: {}", log_file.display());

        let content = fs::read_to_string(log_file).map_err(|source| {
            AggregateError::ReadFailed {
                path: log_file.clone(),
                source,
            }
        })?;

        let parsed = repair_and_parse(log_file, &content, config.strategy)?;
        check_time_kinds(&mut first_kind, log_file, &parsed)?;
        entries.extend(parsed);
    }

    if entries.is_empty() {
        return Err(AggregateError::EmptyResult {
            path: config.log_dir.clone(),
        });
    }

    sort_by_time(&mut entries);
    debug!(
        "Merged {} entries from {} files",
        entries.len(),
        log_files.len()
    );

    Ok(AggregateResult {
        entries,
        file_count: log_files.len(),
    })
}

/// Stable ascending sort on `time`; equal timestamps keep their order
///
/// Numeric and string timestamps do not compare and are treated as
/// equal here; `aggregate` rejects such a mix before sorting.
pub fn sort_by_time(entries: &mut [LogEntry]) {
    entries.sort_by(|a, b| a.time().partial_cmp(b.time()).unwrap_or(Ordering::Equal));
}

/// Every entry must share the kind of the first timestamp seen
///
/// **Private** - internal helper for aggregate
fn check_time_kinds(
    first_kind: &mut Option<(TimeKind, PathBuf)>,
    path: &Path,
    entries: &[LogEntry],
) -> Result<(), AggregateError> {
    for entry in entries {
        let kind = entry.time().kind();
        let Some((expected, first_path)) = first_kind.as_ref() else {
            *first_kind = Some((kind, path.to_path_buf()));
            continue;
        };

        if *expected != kind {
            return Err(AggregateError::MixedTimeKinds {
                first: first_path.clone(),
                first_kind: *expected,
                second: path.to_path_buf(),
                second_kind: kind,
            });
        }
    }

    Ok(())
}
