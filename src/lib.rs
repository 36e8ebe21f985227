// src/lib.rs

pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod feed;
pub mod logging;
pub mod monitor;
pub mod server;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::catalog::{run_consumer, Catalog, CatalogedFile};
use crate::cli::CliArgs;
use crate::config::load_optional;
use crate::monitor::{run_monitor, validate_directory};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - one monitor task per watched directory
/// - the discovery channel and its single catalog consumer
/// - the HTTP server
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    info!("running dirfeed");

    let cfg = load_optional(args.config.as_deref())?;

    // Fail fast on unusable directories before anything is spawned.
    for dir in &args.directories {
        validate_directory(dir)?;
    }

    let server_address = format!("{}:{}", args.base_url, args.port);
    let channel_meta = cfg.feed.resolve(&server_address);

    // Capacity-1 channel: a publish blocks until the consumer has drained
    // the previous discovery, so nothing is dropped and per-monitor order
    // is preserved.
    let (additions_tx, additions_rx) = mpsc::channel::<CatalogedFile>(1);

    let shutdown = CancellationToken::new();

    // Ctrl-C → graceful shutdown.
    {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            shutdown.cancel();
        });
    }

    let interval = Duration::from_secs(args.scan_interval_secs);
    for dir in &args.directories {
        let dir = dir.clone();
        let tx = additions_tx.clone();
        let token = shutdown.clone();
        tokio::spawn(async move {
            if let Err(err) = run_monitor(dir.clone(), interval, tx, token).await {
                error!(directory = ?dir, error = ?err, "monitor terminated");
            }
        });
    }
    // Monitors hold the only senders from here on.
    drop(additions_tx);

    let catalog = Arc::new(Catalog::new());
    tokio::spawn(run_consumer(
        Arc::clone(&catalog),
        additions_rx,
        server_address,
        shutdown.clone(),
    ));

    let app = server::router(catalog, channel_meta);
    server::serve(app, args.port, shutdown).await
}
