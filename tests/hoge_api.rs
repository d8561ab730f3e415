//! End-to-end tests for the Hoge HTTP API
//!
//! These tests drive the full stack (router, handlers, store) against the
//! in-memory document backend, which stands in for the emulated datastore
//! the original design tested against.

use axum::http::StatusCode;
use axum_test::TestServer;
use hoge::prelude::*;
use serde_json::{Value, json};

fn test_server() -> TestServer {
    let backend = Arc::new(InMemoryDocumentStore::new());
    let app = ServerBuilder::new()
        .with_store(HogeStore::new(backend))
        .build()
        .expect("router should build");

    TestServer::new(app)
}

async fn seed(server: &TestServer, id: &str, value: &str) -> Hoge {
    let response = server
        .post("/api/hoge")
        .json(&json!({"id": id, "value": value}))
        .await;

    assert_eq!(
        response.status_code(),
        StatusCode::OK,
        "seeding '{}' failed: {}",
        id,
        response.text()
    );
    response.json::<Hoge>()
}

// =============================================================================
// Get
// =============================================================================

#[tokio::test]
async fn test_get_returns_record() {
    let server = test_server();
    seed(&server, "hoge", "hogehoge").await;

    let response = server.get("/api/hoge/hoge").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let record = response.json::<Hoge>();
    assert_eq!(record.id, "hoge");
    assert_eq!(record.value, "hogehoge");
}

#[tokio::test]
async fn test_get_absent_returns_404() {
    let server = test_server();

    let response = server.get("/api/hoge/hoge").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body = response.json::<Value>();
    assert_eq!(body["code"], "NOT_FOUND");
}

// =============================================================================
// List
// =============================================================================

async fn seed_five(server: &TestServer) {
    for i in 0..5 {
        seed(server, &format!("hoge{}", i), &format!("hogehoge{}", i)).await;
    }
}

#[tokio::test]
async fn test_list_returns_all_in_key_order() {
    let server = test_server();
    seed_five(&server).await;

    let response = server.get("/api/hoge").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let page = response.json::<HogePage>();
    assert_eq!(page.list.len(), 5);
    assert_eq!(page.cursor, "");

    for (idx, record) in page.list.iter().enumerate() {
        assert_eq!(record.id, format!("hoge{}", idx));
        assert_eq!(record.value, format!("hogehoge{}", idx));
    }
}

#[tokio::test]
async fn test_list_paginates_and_cursor_resumes() {
    let server = test_server();
    seed_five(&server).await;

    let response = server.get("/api/hoge").add_query_param("limit", 3).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let first = response.json::<HogePage>();
    assert_eq!(first.list.len(), 3);
    assert!(!first.cursor.is_empty());

    let response = server
        .get("/api/hoge")
        .add_query_param("cursor", &first.cursor)
        .add_query_param("limit", 3)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let second = response.json::<HogePage>();
    assert_eq!(second.list.len(), 2);
    assert_eq!(second.cursor, "");
}

#[tokio::test]
async fn test_list_unbounded_limit_returns_everything() {
    let server = test_server();
    for i in 0..12 {
        seed(&server, &format!("hoge{:02}", i), "v").await;
    }

    let response = server.get("/api/hoge").add_query_param("limit", -1).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let page = response.json::<HogePage>();
    assert_eq!(page.list.len(), 12);
    assert_eq!(page.cursor, "");
}

#[tokio::test]
async fn test_list_malformed_cursor_returns_400() {
    let server = test_server();
    seed_five(&server).await;

    let response = server
        .get("/api/hoge")
        .add_query_param("cursor", "***broken***")
        .add_query_param("limit", 3)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["code"], "INVALID_CURSOR");
}

#[tokio::test]
async fn test_list_invalid_limit_returns_400() {
    let server = test_server();

    let response = server.get("/api/hoge").add_query_param("limit", -5).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Insert
// =============================================================================

#[tokio::test]
async fn test_insert_creates_record() {
    let server = test_server();

    let response = server
        .post("/api/hoge")
        .json(&json!({"id": "hoge", "value": "hogehoge"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let record = response.json::<Hoge>();
    assert_eq!(record.id, "hoge");
    assert_eq!(record.value, "hogehoge");
    assert_eq!(record.created_at, record.updated_at);

    // The record is readable back through the API.
    let fetched = server.get("/api/hoge/hoge").await.json::<Hoge>();
    assert_eq!(fetched, record);
}

#[tokio::test]
async fn test_insert_without_id_returns_400() {
    let server = test_server();

    let response = server
        .post("/api/hoge")
        .json(&json!({"value": "hogehoge"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_insert_duplicate_returns_400_and_preserves_record() {
    let server = test_server();
    seed(&server, "hoge", "hogehoge").await;

    let response = server
        .post("/api/hoge")
        .json(&json!({"id": "hoge", "value": "overwritten"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["code"], "ALREADY_EXISTS");

    let record = server.get("/api/hoge/hoge").await.json::<Hoge>();
    assert_eq!(record.value, "hogehoge");
}

#[tokio::test]
async fn test_insert_malformed_body_returns_400() {
    let server = test_server();

    let response = server
        .post("/api/hoge")
        .text("{not json")
        .content_type("application/json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_changes_value_and_preserves_created_at() {
    let server = test_server();
    let inserted = seed(&server, "hoge", "hogehoge").await;

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let response = server
        .put("/api/hoge/hoge")
        .json(&json!({"id": "hoge", "value": "updated"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let updated = response.json::<Hoge>();
    assert_eq!(updated.id, "hoge");
    assert_eq!(updated.value, "updated");
    assert_eq!(updated.created_at, inserted.created_at);
    assert!(updated.updated_at > inserted.updated_at);

    let fetched = server.get("/api/hoge/hoge").await.json::<Hoge>();
    assert_eq!(fetched.value, "updated");
}

#[tokio::test]
async fn test_update_absent_returns_404() {
    let server = test_server();

    let response = server
        .put("/api/hoge/hoge")
        .json(&json!({"id": "hoge", "value": "hogehoge"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_body_without_id_uses_path_id() {
    let server = test_server();
    seed(&server, "hoge", "hogehoge").await;

    let response = server
        .put("/api/hoge/hoge")
        .json(&json!({"value": "updated"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Hoge>().value, "updated");
}

#[tokio::test]
async fn test_update_mismatched_body_id_returns_400() {
    let server = test_server();
    seed(&server, "hoge", "hogehoge").await;

    let response = server
        .put("/api/hoge/hoge")
        .json(&json!({"id": "fuga", "value": "updated"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_then_get_returns_404() {
    let server = test_server();
    seed(&server, "hoge", "hogehoge").await;

    let response = server.delete("/api/hoge/hoge").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), Value::Null);

    let response = server.get("/api/hoge/hoge").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_absent_returns_200() {
    let server = test_server();

    let response = server.delete("/api/hoge/hoge").await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = test_server();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["status"], "ok");
}
