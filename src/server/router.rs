//! Route registration for the Hoge API

use crate::server::handlers::{
    AppState, delete_hoge, get_hoge, insert_hoge, list_hoge, update_hoge,
};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

/// Build the Hoge CRUD routes
///
/// - GET    /api/hoge        - List records (cursor pagination)
/// - POST   /api/hoge        - Insert a record
/// - GET    /api/hoge/{id}   - Get a record
/// - PUT    /api/hoge/{id}   - Update a record
/// - DELETE /api/hoge/{id}   - Delete a record
pub fn build_hoge_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/hoge", get(list_hoge).post(insert_hoge))
        .route(
            "/api/hoge/{id}",
            get(get_hoge).put(update_hoge).delete(delete_hoge),
        )
        .with_state(state)
}

/// Build health check routes
pub fn build_health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

/// Health check endpoint handler
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "hoge-api"
    }))
}
