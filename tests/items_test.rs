//! Catalog page integration tests
//!
//! The session-gated page family: gate behavior, list-with-search, and the
//! create/edit/update/delete flows, all through the real router.

mod common;

use axum::http::StatusCode;
use bookrack::store::Store;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use common::{login_as_admin, server_with_store};

const TITLE: &str = "The Go Programming Language";

async fn create_book(server: &axum_test::TestServer, title: &str, author: &str, isbn: &str) {
    let response = server
        .post("/items")
        .form(&[("title", title), ("author", author), ("isbn", isbn)])
        .await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/items");
}

#[tokio::test]
async fn test_page_routes_require_a_session() {
    let (server, _store) = server_with_store();

    let edit_path = format!("/items/edit/{}", Uuid::new_v4());
    for path in ["/items", "/items/create", edit_path.as_str()] {
        let response = server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::SEE_OTHER, "{path}");
        assert_eq!(response.header("location"), "/login", "{path}");
    }

    let response = server
        .post("/items")
        .form(&[("title", "x"), ("author", "y"), ("isbn", "z")])
        .await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/login");
}

#[tokio::test]
async fn test_created_item_listed_exactly_once() {
    let (server, _store) = server_with_store();
    login_as_admin(&server).await;

    create_book(&server, TITLE, "Donovan", "978-0134190440").await;

    let page = server.get("/items").await;
    assert_eq!(page.status_code(), StatusCode::OK);
    assert_eq!(page.text().matches(TITLE).count(), 1);
}

#[tokio::test]
async fn test_search_is_case_insensitive_substring() {
    let (server, _store) = server_with_store();
    login_as_admin(&server).await;
    create_book(&server, TITLE, "Donovan", "978").await;

    for needle in ["go", "GO"] {
        let page = server.get("/items").add_query_param("search", needle).await;
        assert!(page.text().contains(TITLE), "search={needle}");
    }

    let page = server.get("/items").add_query_param("search", "xyz").await;
    assert!(!page.text().contains(TITLE));
}

#[tokio::test]
async fn test_search_matches_author() {
    let (server, _store) = server_with_store();
    login_as_admin(&server).await;
    create_book(&server, "Left Hand of Darkness", "Ursula K. Le Guin", "").await;

    let page = server.get("/items").add_query_param("search", "le guin").await;
    assert!(page.text().contains("Left Hand of Darkness"));
}

#[tokio::test]
async fn test_create_form_renders() {
    let (server, _store) = server_with_store();
    login_as_admin(&server).await;

    let response = server.get("/items/create").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains(r#"action="/items""#));
}

#[tokio::test]
async fn test_edit_update_flow() {
    let (server, store) = server_with_store();
    login_as_admin(&server).await;
    create_book(&server, "Dune", "Herbert", "1").await;

    let item = store.list_items(None).await.unwrap().pop().unwrap();

    let form = server.get(&format!("/items/edit/{}", item.id)).await;
    assert_eq!(form.status_code(), StatusCode::OK);
    assert!(form.text().contains(r#"value="Dune""#));

    let response = server
        .post(&format!("/items/update/{}", item.id))
        .form(&[("title", "Dune Messiah"), ("author", "Herbert"), ("isbn", "2")])
        .await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);

    let updated = store.get_item(item.id).await.unwrap().unwrap();
    assert_eq!(updated.title, "Dune Messiah");
    assert_eq!(updated.isbn, "2");
}

#[tokio::test]
async fn test_edit_missing_item_is_not_found() {
    let (server, _store) = server_with_store();
    login_as_admin(&server).await;

    let response = server.get(&format!("/items/edit/{}", Uuid::new_v4())).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_missing_item_is_not_found() {
    let (server, _store) = server_with_store();
    login_as_admin(&server).await;

    let response = server
        .post(&format!("/items/update/{}", Uuid::new_v4()))
        .form(&[("title", "x"), ("author", "y"), ("isbn", "z")])
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_flow() {
    let (server, store) = server_with_store();
    login_as_admin(&server).await;
    create_book(&server, "Dune", "Herbert", "1").await;

    let item = store.list_items(None).await.unwrap().pop().unwrap();
    let response = server.post(&format!("/items/delete/{}", item.id)).await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);

    assert!(store.get_item(item.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_missing_item_is_not_found() {
    let (server, _store) = server_with_store();
    login_as_admin(&server).await;

    let response = server
        .post(&format!("/items/delete/{}", Uuid::new_v4()))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_form_fields_default_to_empty() {
    let (server, store) = server_with_store();
    login_as_admin(&server).await;

    let response = server.post("/items").form(&[("title", "Only a Title")]).await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);

    let item = store.list_items(None).await.unwrap().pop().unwrap();
    assert_eq!(item.title, "Only a Title");
    assert_eq!(item.author, "");
    assert_eq!(item.isbn, "");
}
