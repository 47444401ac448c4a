//! Common test utilities for integration tests.
//!
//! Provides an in-process fake of the book catalog backend, wiring helpers,
//! and a message pump for driving [`App`] without a terminal.
//!
//! # Example
//!
//! ```ignore
//! let backend = FakeBackend::start().await;
//! let storage = Arc::new(InMemoryStore::new());
//! let mut app = test_app(&backend.uri(), storage.clone());
//! ```

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::json;
use tokio::sync::mpsc::UnboundedReceiver;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

use bookshelf::adapters::mock::InMemoryStore;
use bookshelf::adapters::ReqwestHttpClient;
use bookshelf::api::BooksApi;
use bookshelf::app::{App, AppMessage};
use bookshelf::models::{Book, CreateBook};
use bookshelf::session::SessionStore;
use bookshelf::startup::{build_services, StartupConfig};

/// Token the fake backend hands out and accepts.
pub const TEST_TOKEN: &str = "t1";

/// Stored user JSON for alice.
pub const ALICE_JSON: &str = r#"{"username":"alice","email":"a@x.com"}"#;

// ============================================================================
// Fake backend
// ============================================================================

#[derive(Default)]
struct Catalog {
    books: Vec<Book>,
    next_id: i64,
}

/// Stateful `/api/Books` responder. Requires `Authorization: Bearer t1`.
#[derive(Clone, Default)]
pub struct FakeCatalog {
    state: Arc<Mutex<Catalog>>,
}

impl FakeCatalog {
    pub fn books(&self) -> Vec<Book> {
        self.state.lock().unwrap().books.clone()
    }

    pub fn seed(&self, book: CreateBook) -> Book {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let book = Book::from_create(state.next_id, book);
        state.books.push(book.clone());
        book
    }
}

fn id_from_path(path: &str) -> Option<i64> {
    path.strip_prefix("/api/Books/")?.parse().ok()
}

impl Respond for FakeCatalog {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let authorized = request
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            == Some(format!("Bearer {}", TEST_TOKEN).as_str());
        if !authorized {
            return ResponseTemplate::new(401);
        }

        let mut state = self.state.lock().unwrap();
        let path = request.url.path();
        match (request.method.as_str(), id_from_path(path)) {
            ("GET", None) => ResponseTemplate::new(200).set_body_json(&state.books),
            ("POST", None) => match serde_json::from_slice::<CreateBook>(&request.body) {
                Ok(draft) => {
                    state.next_id += 1;
                    let book = Book::from_create(state.next_id, draft);
                    state.books.push(book.clone());
                    ResponseTemplate::new(201).set_body_json(&book)
                }
                Err(e) => ResponseTemplate::new(400).set_body_string(e.to_string()),
            },
            ("PUT", Some(id)) => match serde_json::from_slice::<Book>(&request.body) {
                Ok(book) => match state.books.iter_mut().find(|b| b.id == id) {
                    Some(slot) => {
                        *slot = book;
                        ResponseTemplate::new(204)
                    }
                    None => ResponseTemplate::new(404).set_body_string("Book not found"),
                },
                Err(e) => ResponseTemplate::new(400).set_body_string(e.to_string()),
            },
            ("DELETE", Some(id)) => {
                let before = state.books.len();
                state.books.retain(|b| b.id != id);
                if state.books.len() < before {
                    ResponseTemplate::new(204)
                } else {
                    ResponseTemplate::new(404).set_body_string("Book not found")
                }
            }
            _ => ResponseTemplate::new(405),
        }
    }
}

/// A wiremock server with the fake catalog and alice's auth endpoints.
pub struct FakeBackend {
    pub server: MockServer,
    pub catalog: FakeCatalog,
}

impl FakeBackend {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let catalog = FakeCatalog::default();

        Mock::given(path_regex(r"^/api/Books(/\d+)?$"))
            .respond_with(catalog.clone())
            .mount(&server)
            .await;

        let auth_body = json!({"username": "alice", "email": "a@x.com", "token": TEST_TOKEN});
        Mock::given(method("POST"))
            .and(path("/api/Auth/login"))
            .and(wiremock::matchers::body_json(json!({"username": "alice", "password": "pw"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(auth_body.clone()))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/Auth/login"))
            .respond_with(ResponseTemplate::new(401))
            .with_priority(10)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/Auth/register"))
            .respond_with(ResponseTemplate::new(200).set_body_json(auth_body))
            .mount(&server)
            .await;

        Self { server, catalog }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Requests received with the given method and path.
    pub async fn count(&self, verb: &str, request_path: &str) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.method.as_str() == verb && r.url.path() == request_path)
            .count()
    }
}

// ============================================================================
// Wiring
// ============================================================================

/// Session store and book client over reqwest and the given storage.
pub fn services(base_url: &str, storage: Arc<InMemoryStore>) -> (SessionStore, BooksApi) {
    let config = StartupConfig::new().with_api_base_url(base_url);
    build_services(&config, Arc::new(ReqwestHttpClient::new()), storage)
}

/// Storage holding alice's session.
pub fn signed_in_storage() -> Arc<InMemoryStore> {
    Arc::new(InMemoryStore::with_entries([
        ("token", TEST_TOKEN),
        ("user", ALICE_JSON),
    ]))
}

/// An app whose session has been restored from `storage` and started.
/// Returns the app and its message receiver.
pub async fn started_app(
    base_url: &str,
    storage: Arc<InMemoryStore>,
) -> (App, UnboundedReceiver<AppMessage>) {
    let (session, books) = services(base_url, storage);
    session.restore().await;
    let mut app = App::new(session, books);
    let rx = app.message_rx.take().expect("fresh app has a receiver");
    app.start();
    (app, rx)
}

// ============================================================================
// Driving the app
// ============================================================================

/// Feed spawned-task results back into the app until `done` holds.
pub async fn pump_until<F>(app: &mut App, rx: &mut UnboundedReceiver<AppMessage>, done: F)
where
    F: Fn(&App) -> bool,
{
    let result = tokio::time::timeout(Duration::from_secs(5), async {
        while !done(app) {
            match rx.recv().await {
                Some(msg) => app.handle_message(msg),
                None => panic!("message channel closed"),
            }
        }
    })
    .await;
    assert!(result.is_ok(), "timed out waiting for app state");
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub fn press(app: &mut App, code: KeyCode) {
    app.handle_key(key(code));
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
}
