//! Storage-access logic for the Hoge resource
//!
//! `HogeStore` owns everything the HTTP layer must not care about: identifier
//! validation, the insert/update existence distinction, timestamp management,
//! and cursor pagination. It talks to the datastore exclusively through the
//! [`DocumentStore`] contract.

use crate::core::error::{HogeError, HogeResult};
use crate::core::page::{DEFAULT_PAGE_SIZE, HogePage, PageToken};
use crate::core::record::{Hoge, HogeDraft};
use crate::storage::{DocumentStore, Occupancy, StorageError};
use chrono::Utc;
use std::sync::Arc;

/// Store for get/list/insert/update/delete over Hoge records
pub struct HogeStore {
    backend: Arc<dyn DocumentStore>,
    default_page_size: usize,
}

impl HogeStore {
    /// Create a store over the given backend
    pub fn new(backend: Arc<dyn DocumentStore>) -> Self {
        Self {
            backend,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Override the page size applied when the client passes `limit=0`
    pub fn with_default_page_size(mut self, page_size: usize) -> Self {
        self.default_page_size = page_size.max(1);
        self
    }

    /// Get a single record by identifier.
    ///
    /// An empty identifier cannot name a record, so it fails with `NotFound`
    /// without touching the backend.
    pub async fn get(&self, id: &str) -> HogeResult<Hoge> {
        if id.is_empty() {
            return Err(HogeError::NotFound { id: id.to_string() });
        }

        self.backend
            .read(id)
            .await?
            .ok_or_else(|| HogeError::NotFound { id: id.to_string() })
    }

    /// List records in key order with cursor pagination.
    ///
    /// - `limit = 0` applies the default page size
    /// - `limit = -1` returns every record with no pagination
    /// - any other negative limit is a validation error
    ///
    /// When more records exist past the page, the returned cursor encodes
    /// the position after the last returned record; otherwise it is empty.
    pub async fn list(&self, cursor: &str, limit: i64) -> HogeResult<HogePage> {
        if limit < -1 {
            return Err(HogeError::Validation {
                field: "limit".to_string(),
                message: format!("limit must be -1, 0 or positive, got {}", limit),
            });
        }

        if limit == -1 {
            let list = self.backend.fetch_all().await?;
            return Ok(HogePage::complete(list));
        }

        let page_size = if limit == 0 {
            self.default_page_size
        } else {
            limit as usize
        };

        let after = PageToken::decode(cursor)?;
        let (list, has_more) = self.backend.fetch_page(after.as_deref(), page_size).await?;

        let cursor = match (has_more, list.last()) {
            (true, Some(last)) => PageToken::encode(&last.id),
            _ => String::new(),
        };

        Ok(HogePage { list, cursor })
    }

    /// Insert a new record.
    ///
    /// Fails with `AlreadyExists` when the identifier is taken. The checked
    /// write performs the existence check and the put as one atomic step, so
    /// concurrent inserts of the same identifier cannot both succeed. Both
    /// timestamps are set to now.
    pub async fn insert(&self, draft: HogeDraft) -> HogeResult<Hoge> {
        if draft.id.is_empty() {
            return Err(HogeError::id_required());
        }

        let now = Utc::now();
        let record = Hoge {
            id: draft.id,
            value: draft.value,
            created_at: now,
            updated_at: now,
        };

        match self
            .backend
            .write_checked(&record.id, record.clone(), Occupancy::Vacant)
            .await
        {
            Ok(()) => Ok(record),
            Err(StorageError::CasConflict { .. }) => Err(HogeError::AlreadyExists {
                id: record.id.clone(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Update an existing record.
    ///
    /// Fails with `NotFound` when no record exists. The original `created_at`
    /// is preserved; `updated_at` is set to now. The checked write catches a
    /// record deleted between the read and the put.
    pub async fn update(&self, draft: HogeDraft) -> HogeResult<Hoge> {
        if draft.id.is_empty() {
            return Err(HogeError::id_required());
        }

        let existing = self
            .backend
            .read(&draft.id)
            .await?
            .ok_or_else(|| HogeError::NotFound {
                id: draft.id.clone(),
            })?;

        let record = Hoge {
            id: draft.id,
            value: draft.value,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };

        match self
            .backend
            .write_checked(&record.id, record.clone(), Occupancy::Occupied)
            .await
        {
            Ok(()) => Ok(record),
            Err(StorageError::CasConflict { .. }) => Err(HogeError::NotFound {
                id: record.id.clone(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete a record by identifier.
    ///
    /// Deletion is idempotent at the storage layer; deleting an absent
    /// identifier succeeds.
    pub async fn delete(&self, id: &str) -> HogeResult<()> {
        if id.is_empty() {
            return Err(HogeError::id_required());
        }

        self.backend.delete(id).await?;

        Ok(())
    }
}
