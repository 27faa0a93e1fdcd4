use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

use crate::SharedState;

pub fn routes() -> Router<SharedState> {
  Router::new()
    .route("/", get(root))
    .route("/health", get(health))
}

async fn root() -> Json<Value> {
  Json(json!({
    "message": "Notebook API",
    "version": env!("CARGO_PKG_VERSION"),
    "endpoints": {
      "/blocks": "Create, list, update, delete, duplicate and reorder blocks",
      "/pages": "Manage the page tree: children, move, duplicate and favorites",
      "/comments": "Block comments and page discussions",
      "/shares": "Share pages with users or by link",
      "/activities": "Per-user notifications",
      "/search": "Search page titles and block text",
      "/users": "Workspace members"
    }
  }))
}

async fn health() -> Json<Value> {
  Json(json!({ "status": "healthy" }))
}
