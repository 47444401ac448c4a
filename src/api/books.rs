//! Book CRUD operations.
//!
//! | Operation | Request |
//! |-----------|---------|
//! | list | `GET {base}/api/Books` |
//! | create | `POST {base}/api/Books` |
//! | update | `PUT {base}/api/Books/{id}` (full record) |
//! | delete | `DELETE {base}/api/Books/{id}` |

use super::client::{ApiClient, Method};
use crate::error::{ApiAction, ApiResult};
use crate::models::{Book, CreateBook};

const BOOKS_PATH: &str = "/api/Books";

/// Client for the book catalog endpoints.
///
/// Every request carries `Content-Type: application/json` and, when a token
/// is stored, `Authorization: Bearer <token>`.
#[derive(Debug, Clone)]
pub struct BooksApi {
    client: ApiClient,
}

impl BooksApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    fn book_path(id: i64) -> String {
        format!("{}/{}", BOOKS_PATH, id)
    }

    /// Fetch every book.
    pub async fn list(&self) -> ApiResult<Vec<Book>> {
        let action = ApiAction::ListBooks;
        let response = self
            .client
            .send(action, Method::Get, BOOKS_PATH, None, true)
            .await?;
        ApiClient::decode(action, &response)
    }

    /// Create a book; the backend assigns the id.
    pub async fn create(&self, book: &CreateBook) -> ApiResult<Book> {
        let action = ApiAction::CreateBook;
        let body = ApiClient::encode(action, book)?;
        let response = self
            .client
            .send(action, Method::Post, BOOKS_PATH, Some(body), true)
            .await?;
        ApiClient::decode(action, &response)
    }

    /// Replace the whole record stored under `id`.
    pub async fn update(&self, id: i64, book: &Book) -> ApiResult<()> {
        let action = ApiAction::UpdateBook;
        let body = ApiClient::encode(action, book)?;
        self.client
            .send(action, Method::Put, &Self::book_path(id), Some(body), true)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client
            .send(ApiAction::DeleteBook, Method::Delete, &Self::book_path(id), None, true)
            .await?;
        Ok(())
    }
}
