//! HTTP request handlers.
//!
//! Handlers stay thin: decode the request, call the directory service,
//! map service errors to status codes. All search and lookup logic
//! lives behind the [`DirectoryService`] boundary.

use crate::error::ServiceError;
use crate::models::{Department, SearchHit};
use crate::services::DirectoryService;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// The directory service behind the HTTP boundary
    pub service: Arc<dyn DirectoryService>,
}

/// Body of a `POST /search` request.
///
/// `query` is the one meaningful field; unknown fields are ignored and
/// a missing field behaves like an empty query.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
}

/// Map a service error to its HTTP representation.
fn error_response(err: ServiceError) -> (StatusCode, String) {
    let status = match err {
        ServiceError::EmptyQuery => StatusCode::BAD_REQUEST,
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, err.to_string())
}

/// `POST /search`: ranked free-text search.
pub async fn handle_search(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<Vec<SearchHit>>, (StatusCode, String)> {
    state
        .service
        .search(&req.query)
        .await
        .map(Json)
        .map_err(error_response)
}

/// `GET /department/{slug}`: detail lookup by routing slug.
pub async fn handle_get_department(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Department>, (StatusCode, String)> {
    state
        .service
        .get_department(&slug)
        .await
        .map(Json)
        .map_err(error_response)
}

/// `GET /departments`: full listing, name ascending.
pub async fn handle_list_departments(State(state): State<AppState>) -> Json<Vec<Department>> {
    Json(state.service.list_departments().await)
}
