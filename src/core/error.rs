//! Typed error handling for the Hoge service
//!
//! Every failure a handler can surface is one of these kinds, and each kind
//! carries its HTTP status mapping:
//!
//! - [`HogeError::Validation`]: empty/missing required field, malformed body → 400
//! - [`HogeError::NotFound`]: no record for the identifier → 404
//! - [`HogeError::AlreadyExists`]: identifier collision on insert → 400
//! - [`HogeError::InvalidCursor`]: malformed pagination token → 400
//! - [`HogeError::Storage`]: opaque failure from the backing datastore → 500
//! - [`HogeError::Internal`]: anything unexpected → 500
//!
//! Handlers return `Result<_, HogeError>` and axum renders the error through
//! the [`IntoResponse`] impl as an [`ErrorResponse`] JSON body.

use crate::storage::StorageError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The error type for all Hoge store and handler operations
#[derive(Debug)]
pub enum HogeError {
    /// A required field is empty or the request payload is malformed
    Validation { field: String, message: String },

    /// No record exists for the identifier
    NotFound { id: String },

    /// A record with the identifier already exists (insert collision)
    AlreadyExists { id: String },

    /// The pagination token could not be decoded
    InvalidCursor { message: String },

    /// The backing datastore failed
    Storage(StorageError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for HogeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HogeError::Validation { field, message } => {
                write!(f, "validation failed for '{}': {}", field, message)
            }
            HogeError::NotFound { id } => {
                write!(f, "hoge with id '{}' not found", id)
            }
            HogeError::AlreadyExists { id } => {
                write!(f, "hoge with id '{}' already exists", id)
            }
            HogeError::InvalidCursor { message } => {
                write!(f, "invalid cursor: {}", message)
            }
            HogeError::Storage(e) => write!(f, "{}", e),
            HogeError::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl std::error::Error for HogeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HogeError::Storage(e) => Some(e),
            _ => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl HogeError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            HogeError::Validation { .. } => StatusCode::BAD_REQUEST,
            HogeError::NotFound { .. } => StatusCode::NOT_FOUND,
            HogeError::AlreadyExists { .. } => StatusCode::BAD_REQUEST,
            HogeError::InvalidCursor { .. } => StatusCode::BAD_REQUEST,
            HogeError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            HogeError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            HogeError::Validation { .. } => "VALIDATION_ERROR",
            HogeError::NotFound { .. } => "NOT_FOUND",
            HogeError::AlreadyExists { .. } => "ALREADY_EXISTS",
            HogeError::InvalidCursor { .. } => "INVALID_CURSOR",
            HogeError::Storage(_) => "STORAGE_ERROR",
            HogeError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response body
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
        }
    }

    /// Shorthand for the ubiquitous "id is required" failure
    pub fn id_required() -> Self {
        HogeError::Validation {
            field: "id".to_string(),
            message: "id is required".to_string(),
        }
    }
}

impl IntoResponse for HogeError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

impl From<StorageError> for HogeError {
    fn from(err: StorageError) -> Self {
        HogeError::Storage(err)
    }
}

/// A specialized Result type for Hoge operations
pub type HogeResult<T> = Result<T, HogeError>;
