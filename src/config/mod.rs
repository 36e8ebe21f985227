// src/config/mod.rs

//! Feed configuration loading for dirfeed.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load an optional config file from disk (`loader.rs`).
//!
//! Every option has a fixed default, so running without a config file is
//! fully supported.

pub mod loader;
pub mod model;

pub use loader::{load_from_path, load_optional};
pub use model::{ConfigFile, FeedSection};
