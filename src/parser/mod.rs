//! Log file parsing and entry definitions.
//!
//! This module handles:
//! - Repairing the near-array text the profiler leaves behind
//! - Parsing it into log entries
//! - Defining the aggregate result written to disk

pub mod repair;
pub mod schema;

// Re-export main types
pub use repair::{reconstruct_array, repair_and_parse, RepairStrategy};
pub use schema::{AggregateResult, LogEntry, TimeKind, Timestamp};
