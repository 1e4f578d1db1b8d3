use crate::aggregator::AggregatorConfig;
use std::path::PathBuf;

/// Arguments for the graph command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct GraphArgs {
    /// Where to find logs and how to repair them
    pub aggregator: AggregatorConfig,

    /// `--outfile` value as given (None = timestamped default)
    pub outfile: Option<String>,

    /// Custom HTML template (None = built-in)
    pub template: Option<PathBuf>,

    /// Leave the log directory in place after a successful run
    pub keep_logs: bool,
}
