// src/monitor/task.rs

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::catalog::{file_identifier, CatalogedFile};

/// Check that a directory exists and is listable before its monitor starts.
///
/// Failure here is fatal at startup and is never retried.
pub fn validate_directory(dir: &Path) -> Result<()> {
    std::fs::read_dir(dir)
        .with_context(|| format!("directory {dir:?} does not exist or is not listable"))?;
    Ok(())
}

/// Monitor one directory until shutdown.
///
/// Every `interval`, list the directory's immediate entries, skip
/// subdirectories, and publish each file whose identifier this monitor has
/// not seen before. The publish blocks until the catalog consumer accepts
/// the file, so no discovery is ever dropped and per-monitor order is
/// preserved.
///
/// A listing failure mid-run (directory removed, permissions revoked) is
/// fatal to this monitor instance only; the error propagates to the caller
/// and other monitors are unaffected. There is no retry or backoff.
pub async fn run_monitor(
    dir: PathBuf,
    interval: Duration,
    additions: mpsc::Sender<CatalogedFile>,
    shutdown: CancellationToken,
) -> Result<()> {
    info!(directory = ?dir, interval_secs = interval.as_secs_f64(), "monitor started");

    let mut seen: HashSet<String> = HashSet::new();

    loop {
        scan_once(&dir, &mut seen, &additions, &shutdown).await?;

        tokio::select! {
            _ = shutdown.cancelled() => {
                debug!(directory = ?dir, "monitor shutting down");
                return Ok(());
            }
            _ = tokio::time::sleep(interval) => {}
        }
    }
}

/// One scan pass: list the directory and publish every newly seen file
/// before going back to sleep.
async fn scan_once(
    dir: &Path,
    seen: &mut HashSet<String>,
    additions: &mpsc::Sender<CatalogedFile>,
    shutdown: &CancellationToken,
) -> Result<()> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .with_context(|| format!("listing directory {dir:?}"))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("reading directory entry in {dir:?}"))?
    {
        let metadata = entry
            .metadata()
            .await
            .with_context(|| format!("reading metadata for {:?}", entry.path()))?;

        if metadata.is_dir() {
            // No recursion into subdirectories.
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        let identifier = file_identifier(&name);
        if !seen.insert(identifier.clone()) {
            continue;
        }

        let modified = metadata
            .modified()
            .with_context(|| format!("reading modified time for {:?}", entry.path()))?;

        let file = CatalogedFile {
            identifier,
            path: entry.path(),
            name: name.clone(),
            size: metadata.len(),
            modified,
        };

        info!(name = %name, "adding file");
        tokio::select! {
            _ = shutdown.cancelled() => return Ok(()),
            sent = additions.send(file) => {
                sent.context("discovery channel closed")?;
            }
        }
    }

    Ok(())
}
