//! Graph command implementation.
//!
//! The graph command:
//! 1. Collects and repairs every profiler log
//! 2. Sorts the merged entries by time
//! 3. Writes the JSON timeline and HTML report
//! 4. Deletes the consumed logs

use crate::aggregator::{aggregate, clear};
use crate::commands::models::GraphArgs;
use crate::output::{load_template, write_report, ReportPaths};
use crate::utils::config::{RESULTS_PREFIX, RESULTS_TIMESTAMP_FORMAT};
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Execute the graph command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// Paths of the JSON and HTML files written
///
/// # Errors
/// * No logs found (guidance is in the message)
/// * A log file that cannot be repaired
/// * Template or output write errors
pub fn execute_graph(args: GraphArgs) -> Result<ReportPaths> {
    let start_time = Instant::now();

    let output_base = resolve_output_base(args.outfile.as_deref(), Local::now());
    debug!("Output base: {}", output_base.display());

    // Load the template before touching any logs so a bad path fails fast
    let template =
        load_template(args.template.as_deref()).context("Failed to load report template")?;

    let result = aggregate(&args.aggregator)?;

    match result.time_span() {
        Some(span) => info!(
            "Merged {} entries from {} files, spanning {:.3}s",
            result.len(),
            result.file_count,
            span
        ),
        None => info!(
            "Merged {} entries from {} files",
            result.len(),
            result.file_count
        ),
    }

    let paths = write_report(&result, &output_base, &template)
        .context("Failed to write profiling report")?;

    if args.keep_logs {
        debug!(
            "Keeping profiler logs in {}",
            args.aggregator.log_dir.display()
        );
    } else {
        clear(&args.aggregator.log_dir).with_context(|| {
            format!(
                "Failed to delete profiler logs in {}",
                args.aggregator.log_dir.display()
            )
        })?;
    }

    info!(
        "Graph completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(paths)
}

/// Output base path (without extension)
///
/// **Public** - `None` gives `toolchain_profiler.results_<YYYYmmdd_HHMM>`;
/// a given name is trimmed and loses a trailing `.html`.
pub fn resolve_output_base(outfile: Option<&str>, now: DateTime<Local>) -> PathBuf {
    match outfile {
        Some(name) => {
            let name = name.trim();
            PathBuf::from(name.strip_suffix(".html").unwrap_or(name))
        }
        None => PathBuf::from(format!(
            "{}{}",
            RESULTS_PREFIX,
            now.format(RESULTS_TIMESTAMP_FORMAT)
        )),
    }
}
