//! Book client against a real HTTP server.

mod common;

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bookshelf::adapters::mock::InMemoryStore;
use bookshelf::api::BooksApi;
use bookshelf::error::{ApiError, ErrorCategory};
use bookshelf::models::{Book, CreateBook};

use common::{services, signed_in_storage, TEST_TOKEN};

fn api(server: &MockServer) -> BooksApi {
    services(&server.uri(), signed_in_storage()).1
}

fn dune(id: i64) -> Book {
    Book::from_create(id, CreateBook::new("Dune", "Frank Herbert"))
}

#[tokio::test]
async fn test_list_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/Books"))
        .and(header("Authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "title": "Dune", "author": "Frank Herbert", "publishedDate": "1965-08-01T00:00:00"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let books = api(&server).list().await.unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "Dune");
    assert_eq!(books[0].published_day(), Some("1965-08-01"));
}

#[tokio::test]
async fn test_create_posts_camel_case_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/Books"))
        .and(header("Content-Type", "application/json"))
        .and(body_partial_json(json!({
            "title": "Dune",
            "author": "Frank Herbert",
            "availableCopies": 2
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 9, "title": "Dune", "author": "Frank Herbert", "availableCopies": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let draft = CreateBook {
        available_copies: Some(2),
        ..CreateBook::new("Dune", "Frank Herbert")
    };
    let created = api(&server).create(&draft).await.unwrap();
    assert_eq!(created.id, 9);
    assert_eq!(created.available_copies, Some(2));
}

#[tokio::test]
async fn test_update_puts_full_record() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/Books/4"))
        .and(body_partial_json(json!({"id": 4, "title": "Dune Messiah"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut book = dune(4);
    book.title = "Dune Messiah".to_string();
    api(&server).update(4, &book).await.unwrap();
}

#[tokio::test]
async fn test_delete_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/Books/4"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    api(&server).delete(4).await.unwrap();
}

#[tokio::test]
async fn test_unauthorized_message_per_operation() {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
        .mount(&server)
        .await;
    let api = api(&server);

    let list = api.list().await.unwrap_err();
    assert_eq!(list.to_string(), "Unauthorized: Please log in to access books.");
    assert_eq!(list.category(), ErrorCategory::Unauthorized);

    let create = api.create(&CreateBook::new("Dune", "Frank Herbert")).await.unwrap_err();
    assert_eq!(create.to_string(), "Unauthorized: Please log in to create books.");

    let update = api.update(1, &dune(1)).await.unwrap_err();
    assert_eq!(update.to_string(), "Unauthorized: Please log in to update books.");

    let delete = api.delete(1).await.unwrap_err();
    assert_eq!(delete.to_string(), "Unauthorized: Please log in to delete books.");
}

#[tokio::test]
async fn test_error_body_becomes_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/Books"))
        .respond_with(ResponseTemplate::new(400).set_body_string("ISBN already exists"))
        .mount(&server)
        .await;

    let err = api(&server)
        .create(&CreateBook::new("Dune", "Frank Herbert"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "ISBN already exists");
    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn test_empty_error_body_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = api(&server).delete(77).await.unwrap_err();
    assert_eq!(err.to_string(), "Request failed: 404");
}

#[tokio::test]
async fn test_malformed_list_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let err = api(&server).list().await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::ParseFailure);
    assert!(err.to_string().starts_with("Failed to fetch books"));
}

#[tokio::test]
async fn test_unreachable_backend() {
    let (_, api) = services("http://127.0.0.1:1", Arc::new(InMemoryStore::new()));

    let err = api.list().await.unwrap_err();
    assert!(matches!(err, ApiError::Unreachable { .. }));
    assert_eq!(
        err.to_string(),
        "Failed to connect to backend at http://127.0.0.1:1. Make sure the backend is running."
    );
}

#[tokio::test]
async fn test_request_without_token_still_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/Books"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let (_, api) = services(&server.uri(), Arc::new(InMemoryStore::new()));
    let err = api.list().await.unwrap_err();
    assert_eq!(err.status(), Some(401));

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}
