//! Shared, swappable handle to the active search index.
//!
//! Request handlers never hold the index directly; they hold an
//! `IndexHandle` and take a snapshot per query. Replacing the index is
//! an atomic pointer swap, so a reload can never expose a partially
//! built index to an in-flight query.

use super::SearchIndex;
use std::sync::{Arc, RwLock};

/// Cloneable handle to the currently published index.
///
/// Reads clone the inner `Arc`, so a query keeps whatever index was
/// current when it started even if a swap happens mid-flight.
#[derive(Clone)]
pub struct IndexHandle {
    inner: Arc<RwLock<Arc<dyn SearchIndex>>>,
}

impl IndexHandle {
    /// Publish a fully built index.
    pub fn new(index: Arc<dyn SearchIndex>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(index)),
        }
    }

    /// Snapshot of the currently published index.
    pub fn current(&self) -> Arc<dyn SearchIndex> {
        match self.inner.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Swap in a new fully built index.
    ///
    /// Queries already holding a snapshot keep the old index until they
    /// finish; new queries see the replacement.
    pub fn replace(&self, index: Arc<dyn SearchIndex>) {
        match self.inner.write() {
            Ok(mut guard) => *guard = index,
            Err(poisoned) => *poisoned.into_inner() = index,
        }
    }
}

impl std::fmt::Debug for IndexHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexHandle")
            .field("departments", &self.current().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader;
    use crate::search::TokenIndex;

    fn index_for(dataset: &str) -> Arc<dyn SearchIndex> {
        Arc::new(TokenIndex::build(
            loader::load_from_reader(dataset.as_bytes()).unwrap(),
        ))
    }

    #[test]
    fn test_current_returns_published_index() {
        let handle = IndexHandle::new(index_for(r#"{"Fire Department": {}}"#));
        assert_eq!(handle.current().len(), 1);
    }

    #[test]
    fn test_replace_swaps_for_new_readers() {
        let handle = IndexHandle::new(index_for(r#"{"Fire Department": {}}"#));
        handle.replace(index_for(r#"{"Fire Department": {}, "City Clerk": {}}"#));
        assert_eq!(handle.current().len(), 2);
    }

    #[test]
    fn test_snapshot_survives_replace() {
        let handle = IndexHandle::new(index_for(r#"{"Fire Department": {}}"#));
        let snapshot = handle.current();

        handle.replace(index_for(r#"{"City Clerk": {}}"#));

        // The old snapshot still answers from the old dataset.
        assert!(snapshot.lookup_slug("fire-department").is_some());
        assert!(handle.current().lookup_slug("fire-department").is_none());
    }

    #[test]
    fn test_clone_shares_published_index() {
        let handle = IndexHandle::new(index_for(r#"{"Fire Department": {}}"#));
        let clone = handle.clone();

        handle.replace(index_for(r#"{"City Clerk": {}}"#));
        assert!(clone.current().lookup_slug("city-clerk").is_some());
    }
}
