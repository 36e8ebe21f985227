// src/server/routes.rs

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tokio_util::io::ReaderStream;
use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::feed::{render_feed, ChannelMeta, RSS_CONTENT_TYPE};

struct AppState {
    catalog: Arc<Catalog>,
    channel: ChannelMeta,
}

/// Build the application router.
///
/// Two routes: `/` for the feed document and `/file/{identifier}/{name}`
/// for downloads. Every other path shape, including malformed file URLs
/// like `/file/onlyonepart`, falls through to a 404 "Invalid URL".
pub fn router(catalog: Arc<Catalog>, channel: ChannelMeta) -> Router {
    let state = Arc::new(AppState { catalog, channel });

    Router::new()
        .route("/", get(feed))
        .route("/file/{identifier}/{name}", get(serve_file))
        .fallback(invalid_url)
        .with_state(state)
}

/// `GET /` - render the current catalog snapshot as RSS XML.
async fn feed(State(state): State<Arc<AppState>>) -> Response {
    let snapshot = state.catalog.snapshot().await;
    let xml = render_feed(&state.channel, &snapshot);
    ([(header::CONTENT_TYPE, RSS_CONTENT_TYPE)], xml).into_response()
}

/// `GET /file/{identifier}/{name}` - stream the file back to the client.
///
/// Lookup is by identifier only; the trailing name segment is accepted as a
/// download-filename hint for clients but never used to resolve the file.
/// The `Content-Disposition` filename always comes from the stored path.
async fn serve_file(
    State(state): State<Arc<AppState>>,
    Path((identifier, _name)): Path<(String, String)>,
) -> Response {
    let Some(file) = state.catalog.lookup(&identifier).await else {
        return (StatusCode::NOT_FOUND, "File not found").into_response();
    };

    let handle = match tokio::fs::File::open(&file.path).await {
        Ok(handle) => handle,
        Err(err) => {
            // Valid at discovery time, unreadable now (deleted or moved).
            warn!(path = ?file.path, error = %err, "cataloged file unreadable");
            return (StatusCode::NOT_FOUND, "File not found").into_response();
        }
    };

    info!(path = ?file.path, "getting file");

    let filename = file
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.name.clone());

    let body = Body::from_stream(ReaderStream::new(handle));
    (
        [(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={filename}"),
        )],
        body,
    )
        .into_response()
}

/// Fallback for any unrecognized path shape.
async fn invalid_url() -> Response {
    (StatusCode::NOT_FOUND, "Invalid URL").into_response()
}
