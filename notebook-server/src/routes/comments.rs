use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use notebook_collaboration::CommentQuery;
use notebook_entity::{Comment, CommentUpdate, CreateCommentParams};
use serde_json::{Value, json};

use crate::{ApiContext, ApiJson, ApiQuery, ApiResult, SharedState};

pub fn routes() -> Router<SharedState> {
  Router::new()
    .route("/comments", get(list_comments).post(create_comment))
    .route(
      "/comments/:comment_id",
      put(update_comment).delete(delete_comment),
    )
    .route("/comments/:comment_id/resolve", put(resolve_comment))
}

async fn list_comments(
  State(state): State<SharedState>,
  ApiQuery(query): ApiQuery<CommentQuery>,
) -> ApiResult<Json<Vec<Comment>>> {
  let comments = state
    .collab
    .comments
    .get_comments(&query.into_filter())
    .await
    .api_context("fetch comments")?;
  Ok(Json(comments))
}

async fn create_comment(
  State(state): State<SharedState>,
  ApiJson(params): ApiJson<CreateCommentParams>,
) -> ApiResult<(StatusCode, Json<Comment>)> {
  let comment = state
    .collab
    .comments
    .create_comment(params)
    .await
    .api_context("create comment")?;
  Ok((StatusCode::CREATED, Json(comment)))
}

async fn update_comment(
  State(state): State<SharedState>,
  Path(comment_id): Path<String>,
  ApiJson(update): ApiJson<CommentUpdate>,
) -> ApiResult<Json<Comment>> {
  let comment = state
    .collab
    .comments
    .update_comment(&comment_id, update)
    .await
    .api_context("update comment")?;
  Ok(Json(comment))
}

async fn delete_comment(
  State(state): State<SharedState>,
  Path(comment_id): Path<String>,
) -> ApiResult<Json<Value>> {
  state
    .collab
    .comments
    .delete_comment(&comment_id)
    .await
    .api_context("delete comment")?;
  Ok(Json(json!({
    "message": "Comment deleted successfully",
    "id": comment_id,
  })))
}

async fn resolve_comment(
  State(state): State<SharedState>,
  Path(comment_id): Path<String>,
) -> ApiResult<Json<Value>> {
  let comment = state
    .collab
    .comments
    .resolve_comment(&comment_id)
    .await
    .api_context("resolve comment")?;
  Ok(Json(json!({
    "message": "Comment resolved successfully",
    "comment": comment,
  })))
}
