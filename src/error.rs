//! Error types for the Switchboard directory service.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur while loading the department dataset.
///
/// All of these are startup-fatal: the process must not begin serving
/// with a missing or malformed dataset.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Dataset file could not be opened or read
    #[error("unable to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset is not a valid JSON mapping
    #[error("unable to decode dataset: {0}")]
    Json(#[from] serde_json::Error),

    /// Dataset decoded to an empty mapping
    #[error("dataset contains no departments")]
    EmptyDataset,

    /// A record key (display name) is empty or whitespace-only
    #[error("department with empty display name")]
    EmptyName,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors surfaced by the search index.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Query has no searchable content (no letters or digits)
    #[error("query has no searchable terms: {0:?}")]
    InvalidQuery(String),

    /// Query execution against a built index failed
    #[error("search execution failed: {0}")]
    Execution(String),
}

/// Errors reported at the service boundary.
///
/// Index faults never cross this boundary as-is; they are mapped to
/// [`ServiceError::Internal`] so callers see a stable, generic condition.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Query was empty after trimming
    #[error("search query cannot be empty")]
    EmptyQuery,

    /// No department with the requested slug
    #[error("no department with slug {0:?}")]
    NotFound(String),

    /// Search failed for an internal reason
    #[error("search is temporarily unavailable")]
    Internal,
}

/// Convenience type alias for Results with LoadError
pub type LoadResult<T> = Result<T, LoadError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with SearchError
pub type SearchResult<T> = Result<T, SearchError>;

/// Convenience type alias for Results with ServiceError
pub type ServiceResult<T> = Result<T, ServiceError>;
