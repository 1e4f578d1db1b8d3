//! Configuration and constants for the CLI.

/// Name of the log directory created under the system temp dir
pub const DEFAULT_LOG_DIR_NAME: &str = "emscripten_toolchain_profiler_logs";

/// Environment variable overriding the log directory
pub const LOG_DIR_ENV: &str = "TOOLCHAIN_PROFILER_LOG_DIR";

/// Substring identifying per-process profiler log files
pub const LOG_FILE_MARKER: &str = "toolchain_profiler.pid_";

/// Prefix of the default output base name (a timestamp is appended)
pub const RESULTS_PREFIX: &str = "toolchain_profiler.results_";

/// Timestamp format appended to RESULTS_PREFIX
pub const RESULTS_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M";

/// Token in the HTML template replaced by the quoted JSON path
pub const TEMPLATE_PLACEHOLDER: &str = "{{{results_log_file}}}";

/// Field every log entry is sorted by
pub const TIME_FIELD: &str = "time";

/// Built-in visualization template
pub const DEFAULT_TEMPLATE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/templates/toolchain_profiler.results_template.html"
));

/// Default log directory: `<tmp>/emscripten_toolchain_profiler_logs`
pub fn default_log_dir() -> std::path::PathBuf {
    std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME)
}
