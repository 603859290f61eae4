//! Typed client core for the `/posts` REST resource.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network. The host supplies a [`Transport`] that performs the
//! round trip, and [`ResourceClient`] strings build, execute and parse
//! together for each of the five operations.
//!
//! # Design
//! - `PostClient` is stateless and holds only `base_url`.
//! - Every operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit and each half can be tested on its own.
//! - Every request carries the same JSON content type, whatever the method.

pub mod client;
pub mod error;
pub mod http;
pub mod resource;
pub mod types;

pub use client::{PostClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, JSON_CONTENT_TYPE};
pub use resource::{ResourceClient, Transport};
pub use types::{DeletePost, FetchedPost, NewPost, PatchPost, Post};
