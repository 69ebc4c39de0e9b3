//! Full-text search over the department directory.
//!
//! This module provides the in-memory search index built once at
//! startup, and the swappable handle the serving layer reads it through.

pub mod handle;
pub mod token_index;

pub use handle::IndexHandle;
pub use token_index::{SearchIndex, TokenIndex};
