use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use notebook_entity::define::BlockId;
use notebook_entity::{Block, BlockUpdate};
use serde_json::{Value, json};

use crate::{ApiContext, ApiJson, ApiResult, SharedState};

pub fn routes() -> Router<SharedState> {
  Router::new()
    .route("/blocks", get(list_blocks).post(create_block))
    .route("/blocks/reorder", put(reorder_blocks))
    .route(
      "/blocks/:block_id",
      get(get_block).put(update_block).delete(delete_block),
    )
    .route("/blocks/:block_id/duplicate", post(duplicate_block))
}

async fn list_blocks(State(state): State<SharedState>) -> ApiResult<Json<Vec<Block>>> {
  let blocks = state.blocks.get_blocks().await.api_context("fetch blocks")?;
  Ok(Json(blocks))
}

async fn get_block(
  State(state): State<SharedState>,
  Path(block_id): Path<String>,
) -> ApiResult<Json<Block>> {
  let block = state
    .blocks
    .get_block(&block_id)
    .await
    .api_context("fetch block")?;
  Ok(Json(block))
}

async fn create_block(
  State(state): State<SharedState>,
  ApiJson(block): ApiJson<Block>,
) -> ApiResult<(StatusCode, Json<Block>)> {
  let block = state
    .blocks
    .create_block(block)
    .await
    .api_context("create block")?;
  Ok((StatusCode::CREATED, Json(block)))
}

async fn update_block(
  State(state): State<SharedState>,
  Path(block_id): Path<String>,
  ApiJson(update): ApiJson<BlockUpdate>,
) -> ApiResult<Json<Block>> {
  let block = state
    .blocks
    .update_block(&block_id, update)
    .await
    .api_context("update block")?;
  Ok(Json(block))
}

async fn delete_block(
  State(state): State<SharedState>,
  Path(block_id): Path<String>,
) -> ApiResult<Json<Value>> {
  state
    .blocks
    .delete_block(&block_id)
    .await
    .api_context("delete block")?;
  Ok(Json(json!({
    "message": "Block deleted successfully",
    "id": block_id,
  })))
}

async fn duplicate_block(
  State(state): State<SharedState>,
  Path(block_id): Path<String>,
) -> ApiResult<(StatusCode, Json<Block>)> {
  let block = state
    .blocks
    .duplicate_block(&block_id)
    .await
    .api_context("duplicate block")?;
  Ok((StatusCode::CREATED, Json(block)))
}

async fn reorder_blocks(
  State(state): State<SharedState>,
  ApiJson(block_ids): ApiJson<Vec<BlockId>>,
) -> ApiResult<Json<Vec<Block>>> {
  let blocks = state
    .blocks
    .reorder_blocks(block_ids)
    .await
    .api_context("reorder blocks")?;
  Ok(Json(blocks))
}
