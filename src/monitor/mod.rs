// src/monitor/mod.rs

//! Directory monitoring.
//!
//! One long-running monitor task per watched directory. Each monitor:
//! - enumerates the directory's immediate entries on a fixed interval
//!   (no recursion into subdirectories),
//! - keeps its own instance-local seen-set keyed by identifier,
//! - publishes each newly seen file onto the shared discovery channel,
//!   blocking until the catalog consumer accepts it.
//!
//! The seen-set is never shared across directories, so the same file name in
//! two watched directories is discovered independently by each monitor and
//! then collides in the catalog (see `catalog::file_identifier`).

pub mod task;

pub use task::{run_monitor, validate_directory};
