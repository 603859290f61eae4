//! The five `/posts` operations as single round trips.

use crate::client::PostClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{FetchedPost, NewPost, Post};

/// Performs one HTTP round trip on behalf of the core.
///
/// Implementations must return non-2xx responses as `Ok` so the parser
/// classifies them; `Err` is reserved for requests that never completed.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Typed client for the posts collection.
///
/// Each method builds one request, hands it to the transport exactly once and
/// parses the answer. There are no retries and nothing is shared between calls.
#[derive(Debug, Clone)]
pub struct ResourceClient<T> {
    client: PostClient,
    transport: T,
}

impl<T: Transport> ResourceClient<T> {
    pub fn new(client: PostClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn fetch_one(&self) -> Result<FetchedPost, ApiError> {
        let response = self.transport.execute(self.client.build_fetch_one())?;
        self.client.parse_fetch_one(response)
    }

    pub fn create(&self, input: &NewPost) -> Result<Post, ApiError> {
        let response = self.transport.execute(self.client.build_create(input)?)?;
        self.client.parse_create(response)
    }

    pub fn replace(&self, input: &Post) -> Result<Post, ApiError> {
        let response = self.transport.execute(self.client.build_replace(input)?)?;
        self.client.parse_replace(response)
    }

    pub fn partial_update(&self, id: u64, title: &str) -> Result<Post, ApiError> {
        let response = self
            .transport
            .execute(self.client.build_partial_update(id, title)?)?;
        self.client.parse_partial_update(response)
    }

    pub fn delete(&self, id: u64) -> Result<(), ApiError> {
        let response = self.transport.execute(self.client.build_delete(id)?)?;
        self.client.parse_delete(response)
    }
}
