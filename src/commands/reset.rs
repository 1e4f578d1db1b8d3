//! Reset command: drop previously captured logs before a clean run.

use crate::aggregator::clear;
use anyhow::{Context, Result};
use std::path::Path;

/// Execute the reset command
///
/// **Public** - main entry point called from main.rs
pub fn execute_reset(log_dir: &Path) -> Result<()> {
    clear(log_dir)
        .with_context(|| format!("Failed to delete profiler logs in {}", log_dir.display()))
}
