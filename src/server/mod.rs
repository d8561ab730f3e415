//! Server module for building the HTTP server
//!
//! This module provides a `ServerBuilder` that wires:
//! - Health check routes
//! - CRUD routes for the Hoge resource
//! - Request tracing and CORS layers

pub mod builder;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::{AppState, ListParams};
