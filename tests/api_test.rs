//! JSON API integration tests
//!
//! The ungated REST family: CRUD over `/api/items` without any session,
//! including the explicit not-found behavior and the page/API asymmetry.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use common::server_with_store;

#[tokio::test]
async fn test_api_is_open_without_a_session() {
    let (server, _store) = server_with_store();

    // The same unauthenticated client is gated on pages...
    let page = server.get("/items").await;
    assert_eq!(page.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(page.header("location"), "/login");

    // ...but the API answers.
    let response = server.get("/api/items").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_api_create_returns_the_record() {
    let (server, _store) = server_with_store();

    let response = server
        .post("/api/items")
        .json(&json!({"title": "Dune", "author": "Herbert", "isbn": "978"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body = response.json::<Value>();
    assert_eq!(body["title"], "Dune");
    assert_eq!(body["author"], "Herbert");
    assert_eq!(body["isbn"], "978");
    assert!(body["id"].as_str().is_some());
}

#[tokio::test]
async fn test_api_created_item_listed_exactly_once() {
    let (server, _store) = server_with_store();

    let created = server
        .post("/api/items")
        .json(&json!({"title": "Dune", "author": "Herbert", "isbn": "978"}))
        .await
        .json::<Value>();

    let listed = server.get("/api/items").await.json::<Value>();
    let matches = listed
        .as_array()
        .unwrap()
        .iter()
        .filter(|item| item["id"] == created["id"])
        .count();
    assert_eq!(matches, 1);
}

#[tokio::test]
async fn test_api_update_returns_the_updated_representation() {
    let (server, _store) = server_with_store();

    let created = server
        .post("/api/items")
        .json(&json!({"title": "Dune", "author": "Herbert", "isbn": "1"}))
        .await
        .json::<Value>();
    let id = created["id"].as_str().unwrap();

    let response = server
        .put(&format!("/api/items/{id}"))
        .json(&json!({"title": "Dune Messiah", "author": "Frank Herbert", "isbn": "2"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body = response.json::<Value>();
    assert_eq!(body["id"].as_str().unwrap(), id);
    assert_eq!(body["title"], "Dune Messiah");
    assert_eq!(body["author"], "Frank Herbert");
    assert_eq!(body["isbn"], "2");
}

#[tokio::test]
async fn test_api_update_missing_id_is_not_found() {
    let (server, _store) = server_with_store();

    let response = server
        .put(&format!("/api/items/{}", Uuid::new_v4()))
        .json(&json!({"title": "x"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let body = response.json::<Value>();
    assert_eq!(body["error"], "not found");
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn test_api_delete_removes_the_item() {
    let (server, _store) = server_with_store();

    let created = server
        .post("/api/items")
        .json(&json!({"title": "Dune"}))
        .await
        .json::<Value>();
    let id = created["id"].as_str().unwrap();

    let response = server.delete(&format!("/api/items/{id}")).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["message"], "Deleted");

    let listed = server.get("/api/items").await.json::<Value>();
    assert_eq!(listed.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_api_delete_missing_id_leaves_collection_unchanged() {
    let (server, _store) = server_with_store();

    server
        .post("/api/items")
        .json(&json!({"title": "Dune"}))
        .await;

    let response = server.delete(&format!("/api/items/{}", Uuid::new_v4())).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let listed = server.get("/api/items").await.json::<Value>();
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_api_missing_fields_default_to_empty() {
    let (server, _store) = server_with_store();

    let body = server
        .post("/api/items")
        .json(&json!({"title": "Only a Title"}))
        .await
        .json::<Value>();
    assert_eq!(body["title"], "Only a Title");
    assert_eq!(body["author"], "");
    assert_eq!(body["isbn"], "");
}

#[tokio::test]
async fn test_api_duplicate_isbn_permitted() {
    let (server, _store) = server_with_store();

    for title in ["First", "Second"] {
        let response = server
            .post("/api/items")
            .json(&json!({"title": title, "isbn": "same-isbn"}))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }

    let listed = server.get("/api/items").await.json::<Value>();
    assert_eq!(listed.as_array().unwrap().len(), 2);
}
