// src/catalog/file.rs

use std::path::PathBuf;
use std::time::SystemTime;

/// One file known to the system.
///
/// All metadata is snapshotted at discovery time and never refreshed. A
/// record is created once per distinct identifier and never removed (there
/// is no deletion detection).
#[derive(Debug, Clone)]
pub struct CatalogedFile {
    /// Content-address of the file *name*; the unique catalog key and the
    /// public-facing identifier embedded in feed links.
    pub identifier: String,

    /// Absolute filesystem path at time of discovery.
    pub path: PathBuf,

    /// File name within its directory.
    pub name: String,

    /// Size in bytes at discovery time.
    pub size: u64,

    /// Modification time at discovery time.
    pub modified: SystemTime,
}

/// Compute the identifier for a file name.
///
/// A deterministic, fixed-length hex digest over the name's bytes. Hashing
/// the name (not the path or the content bytes) keeps scanning cheap and the
/// resulting URL stable across restarts, at the cost that two files with the
/// same name in different watched directories collide. That collision is a
/// documented limitation, not a bug to silently fix.
pub fn file_identifier(name: &str) -> String {
    blake3::hash(name.as_bytes()).to_hex().to_string()
}
