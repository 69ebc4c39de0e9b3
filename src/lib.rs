//! Switchboard - a searchable directory of organizational contacts.
//!
//! This library serves a small, fixed set of department records: it
//! builds a full-text index over the dataset at startup, derives stable
//! routing slugs for detail pages, and answers ranked free-text search
//! queries. A debouncer paces how often callers issue those queries.
//!
//! # Architecture
//!
//! - **models**: Data structures for departments and search results
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **domain**: Slug generation and collision handling
//! - **loader**: Startup decoding of the department dataset
//! - **search**: Token index and the swappable index handle
//! - **services**: Search/lookup service boundary
//! - **debounce**: Rate limiting for as-you-type callers
//! - **server**: JSON/HTTP boundary

// Re-export commonly used types
pub mod config;
pub mod debounce;
pub mod domain;
pub mod error;
pub mod loader;
pub mod models;
pub mod search;
pub mod server;
pub mod services;

pub use config::Config;
pub use debounce::{DebounceConfig, Debouncer};
pub use domain::{assign_slugs, slugify};
pub use error::{ConfigError, LoadError, SearchError, ServiceError};
pub use models::{Department, SearchHit};
pub use search::{IndexHandle, SearchIndex, TokenIndex};
pub use services::{DirectoryService, DirectoryServiceImpl};
