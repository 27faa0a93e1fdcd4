use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use notebook_entity::Activity;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{ApiContext, ApiQuery, ApiResult, SharedState};

pub fn routes() -> Router<SharedState> {
  Router::new()
    // Both routes share the `:id` segment: a user id when listing, an
    // activity id when marking one as read.
    .route("/activities/:id", get(list_activities))
    .route("/activities/:id/read", put(mark_read))
    .route("/activities/users/:user_id/read-all", put(mark_all_read))
}

#[derive(Debug, Deserialize)]
struct ListParams {
  #[serde(default)]
  unread_only: bool,
}

async fn list_activities(
  State(state): State<SharedState>,
  Path(user_id): Path<String>,
  ApiQuery(params): ApiQuery<ListParams>,
) -> ApiResult<Json<Vec<Activity>>> {
  let activities = state
    .collab
    .activities
    .list_activities(&user_id, params.unread_only)
    .await
    .api_context("fetch activities")?;
  Ok(Json(activities))
}

async fn mark_read(
  State(state): State<SharedState>,
  Path(activity_id): Path<String>,
) -> ApiResult<Json<Value>> {
  let activity = state
    .collab
    .activities
    .mark_read(&activity_id)
    .await
    .api_context("mark activity as read")?;
  Ok(Json(json!({
    "message": "Activity marked as read",
    "activity": activity,
  })))
}

async fn mark_all_read(
  State(state): State<SharedState>,
  Path(user_id): Path<String>,
) -> ApiResult<Json<Value>> {
  let count = state
    .collab
    .activities
    .mark_all_read(&user_id)
    .await
    .api_context("mark activities as read")?;
  Ok(Json(json!({
    "message": format!("Marked {} activities as read", count),
    "count": count,
  })))
}
