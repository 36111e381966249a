//! HTTP client for end-to-end tests
//!
//! Wraps reqwest with one method per library operation.
//! When API routes or request formats change, update only this file.

use super::constants::*;
use library_server::Book;
use reqwest::Response;
use serde_json::json;
use std::time::Duration;

#[derive(Clone)]
pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    #[allow(dead_code)]
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

#[allow(dead_code)]
impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    /// POST /v1/books
    pub async fn create_book(&self, book: &Book) -> Response {
        self.client
            .post(format!("{}/v1/books", self.base_url))
            .json(&json!({ "book": book }))
            .send()
            .await
            .expect("CreateBook request failed")
    }

    /// GET /v1/books/{id}
    pub async fn get_book(&self, id: i32) -> Response {
        self.client
            .get(format!("{}/v1/books/{}", self.base_url, id))
            .send()
            .await
            .expect("GetBook request failed")
    }

    /// PUT /v1/books
    pub async fn update_book(&self, book: &Book) -> Response {
        self.client
            .put(format!("{}/v1/books", self.base_url))
            .json(&json!({ "book": book }))
            .send()
            .await
            .expect("UpdateBook request failed")
    }

    /// DELETE /v1/books/{id}
    pub async fn delete_book(&self, id: i32) -> Response {
        self.client
            .delete(format!("{}/v1/books/{}", self.base_url, id))
            .send()
            .await
            .expect("DeleteBook request failed")
    }

    /// GET /v1/books
    pub async fn list_books(&self) -> Response {
        self.client
            .get(format!("{}/v1/books", self.base_url))
            .send()
            .await
            .expect("ListBooks request failed")
    }
}
