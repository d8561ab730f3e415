//! Document-store boundary contract and backends
//!
//! The store logic never talks to a datastore client directly; it goes
//! through [`DocumentStore`], which makes the two consistency-sensitive
//! operations explicit instead of hiding them behind an ambient transaction:
//!
//! - [`DocumentStore::write_checked`] is a compare-and-swap by key. The
//!   insert/update existence checks ride on it, so two concurrent inserts of
//!   the same identifier cannot both succeed.
//! - [`DocumentStore::fetch_page`] is a position-based page scan that
//!   reports whether records remain past the page, so the caller can emit a
//!   continuation token without a second query.

pub mod memory;

pub use memory::InMemoryDocumentStore;

use crate::core::record::Hoge;
use async_trait::async_trait;
use thiserror::Error;

/// Whether a key currently holds a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupancy {
    Vacant,
    Occupied,
}

/// Errors reported by a storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    /// A checked write found the key in the wrong state
    #[error("conditional write failed: key is {found:?}")]
    CasConflict { found: Occupancy },

    /// Opaque failure from the backing datastore
    #[error("storage backend error: {message}")]
    Backend { message: String },
}

/// Contract for the backing key-value document store.
///
/// Records are keyed by their identifier and iterated in key order. List
/// reads are not required to be transactional; a page scan that misses or
/// duplicates records under concurrent writes is acceptable. Checked writes
/// must be atomic with respect to each other on the same key.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read the record under `id`, if any.
    async fn read(&self, id: &str) -> Result<Option<Hoge>, StorageError>;

    /// Atomically write `record` under `id` if the key's occupancy matches
    /// `expect`.
    ///
    /// Fails with [`StorageError::CasConflict`] when the key is occupied but
    /// `Vacant` was expected (insert collision) or vacant but `Occupied` was
    /// expected (update of a vanished record).
    async fn write_checked(
        &self,
        id: &str,
        record: Hoge,
        expect: Occupancy,
    ) -> Result<(), StorageError>;

    /// Fetch up to `page_size` records in key order, starting strictly after
    /// `after` (`None` = start of the key order).
    ///
    /// The boolean reports whether at least one more record exists past the
    /// returned page. Implementations probe `page_size + 1` candidates and
    /// surface the extra one only through the flag.
    async fn fetch_page(
        &self,
        after: Option<&str>,
        page_size: usize,
    ) -> Result<(Vec<Hoge>, bool), StorageError>;

    /// Fetch every record in key order.
    async fn fetch_all(&self) -> Result<Vec<Hoge>, StorageError>;

    /// Delete the record under `id`. Deleting an absent key is a no-op.
    async fn delete(&self, id: &str) -> Result<(), StorageError>;
}
