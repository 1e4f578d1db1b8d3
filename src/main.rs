//! Toolchain Profiler CLI
//!
//! Aggregates build toolchain profiling logs into a sorted JSON
//! timeline and an HTML report.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use env_logger::Env;
use std::path::PathBuf;
use std::process;

use toolchain_profiler::aggregator::AggregatorConfig;
use toolchain_profiler::commands::{execute_graph, execute_reset, GraphArgs};
use toolchain_profiler::parser::RepairStrategy;
use toolchain_profiler::utils::config::{default_log_dir, LOG_DIR_ENV};

/// Toolchain Profiler - merge build profiling logs into a report
#[derive(Parser, Debug)]
#[command(name = "toolchain-profiler")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Delete all previously recorded profiling log files
    #[arg(long)]
    reset: bool,

    /// Draw a graph from all recorded profiling log files
    #[arg(long)]
    graph: bool,

    /// Name of the results file to generate (a trailing .html is dropped)
    #[arg(long, value_name = "NAME")]
    outfile: Option<String>,

    /// Directory holding the profiler logs
    #[arg(long, env = LOG_DIR_ENV, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// HTML template to render instead of the built-in one
    #[arg(long, value_name = "FILE")]
    template: Option<PathBuf>,

    /// How malformed log files are repaired
    #[arg(long, value_enum, default_value_t = RepairStrategy::PerLine)]
    repair: RepairStrategy,

    /// Keep the log files after generating the report
    #[arg(long)]
    keep_logs: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments; every usage error exits with 1
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    };

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let log_dir = cli.log_dir.unwrap_or_else(default_log_dir);

    // Execute command
    if cli.reset {
        execute_reset(&log_dir)?;
    } else if cli.graph {
        let args = GraphArgs {
            aggregator: AggregatorConfig::new(log_dir).with_strategy(cli.repair),
            outfile: cli.outfile,
            template: cli.template,
            keep_logs: cli.keep_logs,
        };

        execute_graph(args)?;
    } else {
        eprintln!("{}", Cli::command().render_help());
        process::exit(1);
    }

    Ok(())
}
