//! HTTP handlers for the Hoge resource
//!
//! Handlers stay thin: parse the request, call the store, let the error
//! type map failures to status codes. A malformed JSON body is a 400, not
//! a 500; the body-bind rejection is caught here and rewritten as a
//! validation error so every client failure has the same shape.

use crate::core::error::{HogeError, HogeResult};
use crate::core::page::HogePage;
use crate::core::record::{Hoge, HogeDraft};
use crate::core::store::HogeStore;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<HogeStore>,
}

/// Query parameters for the list endpoint
///
/// `limit=0` (the default) applies the server's default page size,
/// `limit=-1` disables pagination entirely.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListParams {
    pub cursor: String,
    pub limit: i64,
}

fn bind_body(payload: Result<Json<HogeDraft>, JsonRejection>) -> HogeResult<HogeDraft> {
    let Json(draft) = payload.map_err(|e| HogeError::Validation {
        field: "body".to_string(),
        message: e.to_string(),
    })?;
    Ok(draft)
}

/// GET /api/hoge/{id}
pub async fn get_hoge(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HogeResult<Json<Hoge>> {
    if id.is_empty() {
        return Err(HogeError::id_required());
    }

    let record = state.store.get(&id).await?;

    Ok(Json(record))
}

/// GET /api/hoge?cursor=&limit=
pub async fn list_hoge(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> HogeResult<Json<HogePage>> {
    let page = state.store.list(&params.cursor, params.limit).await?;

    Ok(Json(page))
}

/// POST /api/hoge
pub async fn insert_hoge(
    State(state): State<AppState>,
    payload: Result<Json<HogeDraft>, JsonRejection>,
) -> HogeResult<Json<Hoge>> {
    let draft = bind_body(payload)?;

    let record = state.store.insert(draft).await?;
    tracing::debug!(id = %record.id, "inserted hoge");

    Ok(Json(record))
}

/// PUT /api/hoge/{id}
///
/// The path identifier is authoritative. A body that names a different
/// identifier is rejected, since identifiers are immutable.
pub async fn update_hoge(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<HogeDraft>, JsonRejection>,
) -> HogeResult<Json<Hoge>> {
    if id.is_empty() {
        return Err(HogeError::id_required());
    }

    let mut draft = bind_body(payload)?;
    if !draft.id.is_empty() && draft.id != id {
        return Err(HogeError::Validation {
            field: "id".to_string(),
            message: format!("id is immutable: body says '{}', path says '{}'", draft.id, id),
        });
    }
    draft.id = id;

    let record = state.store.update(draft).await?;
    tracing::debug!(id = %record.id, "updated hoge");

    Ok(Json(record))
}

/// DELETE /api/hoge/{id}
///
/// Responds with a JSON `null` body on success.
pub async fn delete_hoge(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HogeResult<Json<serde_json::Value>> {
    if id.is_empty() {
        return Err(HogeError::id_required());
    }

    state.store.delete(&id).await?;
    tracing::debug!(id = %id, "deleted hoge");

    Ok(Json(serde_json::Value::Null))
}
