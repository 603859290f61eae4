use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub user_id: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub user_id: u64,
}

/// PUT body. The id in the path wins over any id in the payload.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplacePost {
    pub title: String,
    pub body: String,
    pub user_id: u64,
}

#[derive(Deserialize)]
pub struct PatchPost {
    pub title: Option<String>,
}

#[derive(Deserialize)]
pub struct DeletePost {
    pub id: u64,
}

#[derive(Default)]
pub struct Store {
    posts: BTreeMap<u64, Post>,
    last_id: u64,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

/// Router whose store starts with `posts`. New ids continue after the
/// highest seeded id.
pub fn app_with(posts: Vec<Post>) -> Router {
    let last_id = posts.iter().map(|p| p.id).max().unwrap_or(0);
    let store = Store {
        posts: posts.into_iter().map(|p| (p.id, p)).collect(),
        last_id,
    };
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route(
            "/posts",
            get(list_posts).post(create_post).delete(delete_post),
        )
        .route("/posts/{id}", put(replace_post).patch(patch_post))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, posts: Vec<Post>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(posts)).await
}

async fn list_posts(State(db): State<Db>) -> Json<Vec<Post>> {
    let store = db.read().await;
    Json(store.posts.values().cloned().collect())
}

async fn create_post(
    State(db): State<Db>,
    Json(input): Json<NewPost>,
) -> (StatusCode, Json<Post>) {
    let mut store = db.write().await;
    store.last_id += 1;
    let post = Post {
        id: store.last_id,
        title: input.title,
        body: input.body,
        user_id: input.user_id,
    };
    store.posts.insert(post.id, post.clone());
    tracing::debug!(id = post.id, "created post");
    (StatusCode::CREATED, Json(post))
}

async fn replace_post(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<ReplacePost>,
) -> Result<Json<Post>, StatusCode> {
    let mut store = db.write().await;
    let post = store.posts.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    *post = Post {
        id,
        title: input.title,
        body: input.body,
        user_id: input.user_id,
    };
    Ok(Json(post.clone()))
}

async fn patch_post(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<PatchPost>,
) -> Result<Json<Post>, StatusCode> {
    let mut store = db.write().await;
    let post = store.posts.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(title) = input.title {
        post.title = title;
    }
    Ok(Json(post.clone()))
}

async fn delete_post(
    State(db): State<Db>,
    Json(input): Json<DeletePost>,
) -> Result<Json<Value>, StatusCode> {
    let mut store = db.write().await;
    match store.posts.remove(&input.id) {
        Some(_) => {
            tracing::debug!(id = input.id, "deleted post");
            Ok(Json(json!({})))
        }
        None => Err(StatusCode::NOT_FOUND),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_serializes_user_id_in_camel_case() {
        let post = Post {
            id: 1,
            title: "Test".to_string(),
            body: "Body".to_string(),
            user_id: 9,
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["userId"], 9);
    }

    #[test]
    fn new_post_rejects_missing_user_id() {
        let result: Result<NewPost, _> = serde_json::from_str(r#"{"title":"t","body":"b"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn replace_post_ignores_payload_id() {
        let input: ReplacePost =
            serde_json::from_str(r#"{"id":99,"title":"t","body":"b","userId":1}"#).unwrap();
        assert_eq!(input.title, "t");
    }

    #[test]
    fn patch_post_title_optional() {
        let input: PatchPost = serde_json::from_str(r#"{}"#).unwrap();
        assert!(input.title.is_none());
    }
}
