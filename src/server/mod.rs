// src/server/mod.rs

//! HTTP surface: the feed document and file downloads.
//!
//! Routing is composed once at startup with the catalog injected into the
//! handlers; there is no ambient global routing state. Handlers never write
//! catalog state.

pub mod routes;

use anyhow::{Context, Result};
use axum::Router;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub use routes::router;

/// Bind the listener and serve until the shutdown token fires.
///
/// A bind/listen failure is fatal and propagates to the caller.
pub async fn serve(app: Router, port: u16, shutdown: CancellationToken) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("binding HTTP listener on port {port}"))?;

    info!(port, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await
        .context("HTTP server terminated")?;

    Ok(())
}
