//! Payload shapes for the `/posts` resource.
//!
//! These are transient message bodies, not cached objects. Field names go
//! over the wire in camelCase (`userId`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A post record as returned by the server.
///
/// Like every derived serde struct, this also accepts a JSON array holding the
/// fields in declaration order (`[id, title, body, userId]`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub user_id: u64,
}

/// Request payload for creating a post. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub user_id: u64,
}

/// Request payload for a partial update. Title is the only patchable field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatchPost {
    pub title: String,
}

/// Request payload for deleting a post through the collection endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeletePost {
    pub id: u64,
}

/// Whatever `GET /posts` answered with.
///
/// The endpoint is addressed as if it returned one post but really returns the
/// collection, so any valid JSON is kept. Variants are tried in order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FetchedPost {
    Many(Vec<Post>),
    One(Post),
    Other(Value),
}

impl FetchedPost {
    /// The single post, when the body held exactly that.
    pub fn as_post(&self) -> Option<&Post> {
        match self {
            FetchedPost::One(post) => Some(post),
            _ => None,
        }
    }
}
