// src/catalog/store.rs

use std::collections::HashMap;
use std::sync::Arc;
use std::time::SystemTime;

use tokio::sync::{mpsc, RwLock};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::catalog::file::CatalogedFile;
use crate::feed::{build_entry, FeedEntry};

/// Consistent read-only view of the catalog for the feed endpoint.
#[derive(Debug, Clone)]
pub struct FeedSnapshot {
    /// Feed entries in insertion order, oldest discovery first.
    pub entries: Vec<FeedEntry>,

    /// Time of the most recent insert, `None` while the catalog is empty.
    pub last_updated: Option<SystemTime>,
}

#[derive(Debug, Default)]
struct CatalogState {
    files: HashMap<String, CatalogedFile>,
    entries: Vec<FeedEntry>,
    last_updated: Option<SystemTime>,
}

/// The in-memory authoritative record of all known files and their derived
/// feed entries.
///
/// Exactly one task mutates this: the consumer spawned via [`run_consumer`].
/// HTTP handlers only read. The `RwLock` guarantees a reader never observes
/// a half-applied insert (map updated but entry list not, or vice versa).
#[derive(Debug, Default)]
pub struct Catalog {
    state: RwLock<CatalogState>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a discovered file and its derived feed entry.
    ///
    /// The entry is always appended; the mapping overwrites on an identifier
    /// collision (same file name discovered by two monitors), last write
    /// wins. The last-updated timestamp moves to now on every insert.
    pub async fn insert(&self, file: CatalogedFile, entry: FeedEntry) {
        let mut state = self.state.write().await;
        state.files.insert(file.identifier.clone(), file);
        state.entries.push(entry);
        state.last_updated = Some(SystemTime::now());
    }

    /// Resolve an identifier to its cataloged file, if known.
    pub async fn lookup(&self, identifier: &str) -> Option<CatalogedFile> {
        self.state.read().await.files.get(identifier).cloned()
    }

    /// Take a consistent snapshot of the current feed state.
    pub async fn snapshot(&self) -> FeedSnapshot {
        let state = self.state.read().await;
        FeedSnapshot {
            entries: state.entries.clone(),
            last_updated: state.last_updated,
        }
    }

    /// Number of distinct identifiers currently cataloged.
    pub async fn len(&self) -> usize {
        self.state.read().await.files.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.files.is_empty()
    }
}

/// Drain the discovery channel into the catalog until the channel closes or
/// shutdown is requested.
///
/// This is the sole writer of catalog state for the lifetime of the process.
/// If it stalls, no new files become visible, but reads of prior state keep
/// being served.
///
/// `server_address` is the base URL feed links are built against, e.g.
/// `http://localhost:64055`.
pub async fn run_consumer(
    catalog: Arc<Catalog>,
    mut additions: mpsc::Receiver<CatalogedFile>,
    server_address: String,
    shutdown: CancellationToken,
) {
    loop {
        tokio::select! {
            _ = shutdown.cancelled() => {
                debug!("catalog consumer shutting down");
                return;
            }
            next = additions.recv() => {
                let Some(file) = next else {
                    debug!("discovery channel closed, catalog consumer exiting");
                    return;
                };

                let entry = build_entry(&file, &server_address);
                debug!(
                    identifier = %file.identifier,
                    name = %file.name,
                    "cataloging discovered file"
                );
                catalog.insert(file, entry).await;
            }
        }
    }
}
