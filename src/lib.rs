//! # Hoge API
//!
//! A sample CRUD HTTP service exposing a single resource ("Hoge") backed by
//! a key-value document store.
//!
//! ## Features
//!
//! - **CRUD over one resource**: get, list, insert, update, delete
//! - **Cursor pagination**: opaque continuation tokens over the key order
//! - **Optimistic existence checks**: insert/update ride on a
//!   compare-and-swap storage primitive, so identifier collisions cannot
//!   race past each other
//! - **Automatic timestamps**: `createdAt` set once, `updatedAt` refreshed
//!   on every write
//! - **Pluggable storage**: handlers only see the `DocumentStore` contract;
//!   an in-memory backend covers tests and local development
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hoge::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let backend = Arc::new(InMemoryDocumentStore::new());
//!
//!     ServerBuilder::new()
//!         .with_store(HogeStore::new(backend))
//!         .serve("127.0.0.1:3000")
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core types ===
    pub use crate::core::{
        error::{ErrorResponse, HogeError, HogeResult},
        page::{DEFAULT_PAGE_SIZE, HogePage, PageToken},
        record::{Hoge, HogeDraft},
        store::HogeStore,
    };

    // === Storage ===
    pub use crate::storage::{DocumentStore, InMemoryDocumentStore, Occupancy, StorageError};

    // === Config ===
    pub use crate::config::AppConfig;

    // === Server ===
    pub use crate::server::{AppState, ListParams, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use std::sync::Arc;
}
