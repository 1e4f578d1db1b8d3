//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod graph;
pub mod models;
pub mod reset;

// Re-export main command functions
pub use graph::{execute_graph, resolve_output_base};
pub use models::GraphArgs;
pub use reset::execute_reset;
