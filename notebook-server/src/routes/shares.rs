use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use notebook_entity::{CreateShareParams, PageShare};
use serde_json::{Value, json};

use crate::{ApiContext, ApiJson, ApiResult, SharedState};

pub fn routes() -> Router<SharedState> {
  Router::new()
    .route("/shares", post(create_share))
    .route("/shares/pages/:page_id", get(list_page_shares))
    .route("/shares/:share_id", delete(delete_share))
}

async fn list_page_shares(
  State(state): State<SharedState>,
  Path(page_id): Path<String>,
) -> ApiResult<Json<Vec<PageShare>>> {
  let shares = state
    .collab
    .shares
    .get_page_shares(&page_id)
    .await
    .api_context("fetch shares")?;
  Ok(Json(shares))
}

async fn create_share(
  State(state): State<SharedState>,
  ApiJson(params): ApiJson<CreateShareParams>,
) -> ApiResult<(StatusCode, Json<PageShare>)> {
  let share = state
    .collab
    .shares
    .create_share(params)
    .await
    .api_context("create share")?;
  Ok((StatusCode::CREATED, Json(share)))
}

async fn delete_share(
  State(state): State<SharedState>,
  Path(share_id): Path<String>,
) -> ApiResult<Json<Value>> {
  state
    .collab
    .shares
    .delete_share(&share_id)
    .await
    .api_context("delete share")?;
  Ok(Json(json!({
    "message": "Share removed successfully",
    "id": share_id,
  })))
}
