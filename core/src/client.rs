//! Stateless HTTP request builder and response parser for `/posts`.
//!
//! # Design
//! `PostClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, JSON_CONTENT_TYPE};
use crate::types::{DeletePost, FetchedPost, NewPost, PatchPost, Post};

/// Host of the public posts service.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Synchronous, stateless request builder and response parser for the posts
/// collection.
#[derive(Debug, Clone)]
pub struct PostClient {
    base_url: String,
}

impl Default for PostClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl PostClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }

    fn record_url(&self, id: u64) -> String {
        format!("{}/posts/{id}", self.base_url)
    }

    /// `GET /posts`. Only ever one request; the answer is whatever the
    /// collection endpoint returns, see [`FetchedPost`].
    pub fn build_fetch_one(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection_url(),
            headers: json_headers(),
            body: None,
        }
    }

    pub fn build_create(&self, input: &NewPost) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Post, self.collection_url(), input)
    }

    pub fn build_replace(&self, input: &Post) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Put, self.record_url(input.id), input)
    }

    pub fn build_partial_update(&self, id: u64, title: &str) -> Result<HttpRequest, ApiError> {
        let patch = PatchPost {
            title: title.to_string(),
        };
        json_request(HttpMethod::Patch, self.record_url(id), &patch)
    }

    /// `DELETE /posts` with `{id}` in the body. The collection URL is targeted,
    /// not `/posts/{id}`.
    pub fn build_delete(&self, id: u64) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Delete, self.collection_url(), &DeletePost { id })
    }

    /// Accepts any valid JSON body on a 2xx status.
    pub fn parse_fetch_one(&self, response: HttpResponse) -> Result<FetchedPost, ApiError> {
        parse_json(response)
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<Post, ApiError> {
        parse_json(response)
    }

    pub fn parse_replace(&self, response: HttpResponse) -> Result<Post, ApiError> {
        parse_json(response)
    }

    pub fn parse_partial_update(&self, response: HttpResponse) -> Result<Post, ApiError> {
        parse_json(response)
    }

    /// Succeeds on any 2xx. The body is never read.
    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string())]
}

fn json_request<T: Serialize>(
    method: HttpMethod,
    path: String,
    payload: &T,
) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_string(payload).map_err(|e| ApiError::SerializationError(e.to_string()))?;
    Ok(HttpRequest {
        method,
        path,
        headers: json_headers(),
        body: Some(body),
    })
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Anything outside `200..=299` becomes `HttpError`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
