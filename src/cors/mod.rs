//! Local static file server with permissive CORS headers.
//!
//! Serves a directory over HTTP so a STAC browser running on another origin
//! can load a catalog from local files. Caching is disabled so edits show up
//! on reload.

pub mod files;
pub mod headers;

use axum::handler::Handler;
use axum::{middleware, Router};
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

// Re-export commonly used items
pub use files::directory_listing;
pub use headers::{apply_cors_headers, cors_headers};

/// Port the server listens on unless told otherwise
pub const DEFAULT_PORT: u16 = 8000;

/// Build the router serving `root`, with CORS headers on every response
///
/// Files, `index.html` and trailing-slash redirects come from `ServeDir`;
/// directories without an index fall through to [`directory_listing`].
pub fn router(root: PathBuf) -> Router {
    let listing = directory_listing.with_state(Arc::new(root.clone()));
    let serve_dir = ServeDir::new(root)
        .append_index_html_on_directories(true)
        .fallback(listing);

    Router::new()
        .fallback_service(serve_dir)
        .layer(middleware::from_fn(cors_headers))
}

/// Serve `root` on `listener` until `shutdown` completes
pub async fn run_server<F>(listener: TcpListener, root: PathBuf, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(root))
        .with_graceful_shutdown(shutdown)
        .await
}
