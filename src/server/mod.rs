//! HTTP server for the department directory.
//!
//! This module wires the directory service to its JSON/HTTP boundary.
//! It owns no search logic; see [`crate::services`].

pub mod handlers;

pub use handlers::{AppState, SearchRequest};

use crate::services::DirectoryService;
use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

/// Build the application router.
pub fn router(service: Arc<dyn DirectoryService>) -> Router {
    Router::new()
        .route("/search", post(handlers::handle_search))
        .route("/departments", get(handlers::handle_list_departments))
        .route("/department/:slug", get(handlers::handle_get_department))
        .with_state(AppState { service })
}

/// Bind and serve until the process exits.
///
/// # Arguments
/// * `addr` - socket address to listen on
/// * `service` - the directory service backing all routes
///
/// # Returns
/// An error if the listener cannot bind or the server fails.
pub async fn run_server(addr: SocketAddr, service: Arc<dyn DirectoryService>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {}", addr);

    axum::serve(listener, router(service)).await?;
    Ok(())
}
