//! In-memory implementation of DocumentStore for testing and development

use crate::core::record::Hoge;
use crate::storage::{DocumentStore, Occupancy, StorageError};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::{Arc, RwLock};

/// In-memory document store
///
/// Stands in for the external datastore in tests and local development.
/// A `BTreeMap` keyed by identifier gives the key-order iteration the page
/// scan relies on; the `RwLock` write path makes checked writes atomic.
#[derive(Clone)]
pub struct InMemoryDocumentStore {
    records: Arc<RwLock<BTreeMap<String, Hoge>>>,
}

impl InMemoryDocumentStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_error(e: impl std::fmt::Display) -> StorageError {
    StorageError::Backend {
        message: format!("failed to acquire lock: {}", e),
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn read(&self, id: &str) -> Result<Option<Hoge>, StorageError> {
        let records = self.records.read().map_err(lock_error)?;

        Ok(records.get(id).cloned())
    }

    async fn write_checked(
        &self,
        id: &str,
        record: Hoge,
        expect: Occupancy,
    ) -> Result<(), StorageError> {
        let mut records = self.records.write().map_err(lock_error)?;

        let found = if records.contains_key(id) {
            Occupancy::Occupied
        } else {
            Occupancy::Vacant
        };

        if found != expect {
            return Err(StorageError::CasConflict { found });
        }

        records.insert(id.to_string(), record);

        Ok(())
    }

    async fn fetch_page(
        &self,
        after: Option<&str>,
        page_size: usize,
    ) -> Result<(Vec<Hoge>, bool), StorageError> {
        let records = self.records.read().map_err(lock_error)?;

        let range = match after {
            Some(key) => records.range::<str, _>((Bound::Excluded(key), Bound::Unbounded)),
            None => records.range::<str, _>(..),
        };

        // N+1 probe: one extra candidate tells us whether a next page exists.
        let mut page: Vec<Hoge> = range.map(|(_, v)| v.clone()).take(page_size + 1).collect();
        let has_more = page.len() > page_size;
        page.truncate(page_size);

        Ok((page, has_more))
    }

    async fn fetch_all(&self) -> Result<Vec<Hoge>, StorageError> {
        let records = self.records.read().map_err(lock_error)?;

        Ok(records.values().cloned().collect())
    }

    async fn delete(&self, id: &str) -> Result<(), StorageError> {
        let mut records = self.records.write().map_err(lock_error)?;

        records.remove(id);

        Ok(())
    }
}
