//! Directory service layer.
//!
//! Business logic for search and slug lookup. This is the boundary the
//! HTTP layer talks to: it validates input, delegates to the search
//! index, and maps index faults to stable, generic service errors.

use crate::error::{ServiceError, ServiceResult};
use crate::models::{Department, SearchHit};
use crate::search::IndexHandle;
use async_trait::async_trait;
use tracing::error;

/// Directory operations exposed to the transport layer.
///
/// Calls never mutate the index or any per-request state, so concurrent
/// calls are safe to issue in parallel.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// Ranked free-text search over the directory.
    ///
    /// Rejects queries that are empty after trimming; any fault from
    /// the index surfaces as [`ServiceError::Internal`].
    async fn search(&self, query: &str) -> ServiceResult<Vec<SearchHit>>;

    /// Resolve a routing slug to its department.
    async fn get_department(&self, slug: &str) -> ServiceResult<Department>;

    /// All departments, in name-ascending order.
    async fn list_departments(&self) -> Vec<Department>;
}

/// Default implementation backed by the published search index.
pub struct DirectoryServiceImpl {
    index: IndexHandle,
}

impl DirectoryServiceImpl {
    /// Create a service reading from the given index handle.
    pub fn new(index: IndexHandle) -> Self {
        Self { index }
    }
}

#[async_trait]
impl DirectoryService for DirectoryServiceImpl {
    async fn search(&self, query: &str) -> ServiceResult<Vec<SearchHit>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ServiceError::EmptyQuery);
        }

        // Snapshot per request: a concurrent index swap cannot affect
        // this query once it has started.
        let index = self.index.current();
        index.query(query).map_err(|e| {
            error!(query, error = %e, "search query failed");
            ServiceError::Internal
        })
    }

    async fn get_department(&self, slug: &str) -> ServiceResult<Department> {
        self.index
            .current()
            .lookup_slug(slug)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(slug.to_string()))
    }

    async fn list_departments(&self) -> Vec<Department> {
        self.index.current().departments().to_vec()
    }
}
