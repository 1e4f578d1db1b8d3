//! Aggregation of profiler logs into a single timeline.
//!
//! This module covers:
//! - Discovering per-process log files
//! - Merging and sorting their entries
//! - Clearing the log directory

pub mod merge;
pub mod store;

// Re-export main types and functions
pub use merge::{aggregate, sort_by_time, AggregatorConfig};
pub use store::{clear, discover};
