//! Report generation: the JSON timeline plus the HTML page that loads it.

use super::html::{render_html, write_html};
use super::json::write_results;
use crate::parser::AggregateResult;
use crate::utils::error::OutputError;
use log::info;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Files produced by one report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub json: PathBuf,
    pub html: PathBuf,
}

/// `<base>.json` and `<base>.html`
///
/// The extension is appended, not swapped, so a base like
/// `toolchain_profiler.results_20240101_1200` keeps its dots.
pub fn report_paths(output_base: &Path) -> ReportPaths {
    let with_suffix = |suffix: &str| {
        let mut name = OsString::from(output_base.as_os_str());
        name.push(suffix);
        PathBuf::from(name)
    };

    ReportPaths {
        json: with_suffix(".json"),
        html: with_suffix(".html"),
    }
}

/// Write the JSON timeline and the HTML report next to each other
///
/// The HTML references the JSON by file name, so the report works from
/// whatever directory it is opened in.
///
/// **Public** - final step of `--graph`
///
/// # Arguments
/// * `result` - Aggregated entries
/// * `output_base` - Path without extension
/// * `template` - HTML template containing the results placeholder
///
/// # Errors
/// * Any `OutputError` from the JSON or HTML writers
pub fn write_report(
    result: &AggregateResult,
    output_base: &Path,
    template: &str,
) -> Result<ReportPaths, OutputError> {
    let paths = report_paths(output_base);

    write_results(result, &paths.json)?;
    info!("Wrote {}", paths.json.display());

    // Both files share a directory; the page loads the JSON relative to itself
    let json_ref = paths.json.file_name().map(Path::new).unwrap_or(paths.json.as_path());
    write_html(&render_html(template, json_ref), &paths.html)?;
    info!("Wrote \"{}\"", paths.html.display());

    Ok(paths)
}
