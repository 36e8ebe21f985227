// src/config/loader.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::model::ConfigFile;

/// Load a configuration file from a given path and return the raw
/// `ConfigFile`.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading config file at {path:?}"))?;

    let config: ConfigFile = toml::from_str(&contents)
        .with_context(|| format!("parsing TOML config from {path:?}"))?;

    Ok(config)
}

/// Load the config file if a path was given, otherwise fall back to
/// defaults.
///
/// This is the entry point used by `run()`: a missing `--config` flag means
/// "all defaults", while a path that fails to read or parse is an error.
pub fn load_optional(path: Option<&str>) -> Result<ConfigFile> {
    match path {
        Some(p) => load_from_path(p),
        None => Ok(ConfigFile::default()),
    }
}
