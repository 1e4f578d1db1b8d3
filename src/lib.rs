//! Toolchain Profiler
//!
//! Merges the per-process logs written by a build toolchain profiler
//! into one time-sorted JSON timeline, and renders an HTML report
//! that visualizes it.
//!
//! This crate provides the core implementation for the
//! `toolchain-profiler` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! toolchain-profiler --reset
//! # ... run the build with profiling enabled ...
//! toolchain-profiler --graph --outfile=build_profile.html
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
