use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use notebook_entity::define::PageId;
use notebook_entity::{CreatePageParams, Page, PageUpdate};
use notebook_folder::PageQuery;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{ApiContext, ApiJson, ApiQuery, ApiResult, SharedState};

pub fn routes() -> Router<SharedState> {
  Router::new()
    .route("/pages", get(list_pages).post(create_page))
    .route(
      "/pages/:page_id",
      get(get_page).put(update_page).delete(delete_page),
    )
    .route("/pages/:page_id/children", get(get_children))
    .route("/pages/:page_id/duplicate", post(duplicate_page))
    .route("/pages/:page_id/move", put(move_page))
    .route("/pages/:page_id/favorite", put(set_favorite))
}

#[derive(Debug, Deserialize)]
struct DuplicateParams {
  #[serde(default)]
  include_blocks: bool,
}

#[derive(Debug, Deserialize)]
struct MoveParams {
  #[serde(default)]
  new_parent_id: Option<PageId>,
}

#[derive(Debug, Deserialize)]
struct FavoriteParams {
  is_favorite: bool,
}

async fn list_pages(
  State(state): State<SharedState>,
  ApiQuery(query): ApiQuery<PageQuery>,
) -> ApiResult<Json<Vec<Page>>> {
  let pages = state
    .folder
    .get_pages(&query.into_filter())
    .await
    .api_context("fetch pages")?;
  Ok(Json(pages))
}

async fn get_page(
  State(state): State<SharedState>,
  Path(page_id): Path<String>,
) -> ApiResult<Json<Page>> {
  let page = state
    .folder
    .get_page(&page_id)
    .await
    .api_context("fetch page")?;
  Ok(Json(page))
}

async fn get_children(
  State(state): State<SharedState>,
  Path(page_id): Path<String>,
) -> ApiResult<Json<Vec<Page>>> {
  let pages = state
    .folder
    .get_children(&page_id)
    .await
    .api_context("fetch child pages")?;
  Ok(Json(pages))
}

async fn create_page(
  State(state): State<SharedState>,
  ApiJson(params): ApiJson<CreatePageParams>,
) -> ApiResult<(StatusCode, Json<Page>)> {
  let page = state
    .folder
    .create_page(params)
    .await
    .api_context("create page")?;
  Ok((StatusCode::CREATED, Json(page)))
}

async fn update_page(
  State(state): State<SharedState>,
  Path(page_id): Path<String>,
  ApiJson(update): ApiJson<PageUpdate>,
) -> ApiResult<Json<Page>> {
  let page = state
    .folder
    .update_page(&page_id, update)
    .await
    .api_context("update page")?;
  Ok(Json(page))
}

async fn delete_page(
  State(state): State<SharedState>,
  Path(page_id): Path<String>,
) -> ApiResult<Json<Value>> {
  state
    .folder
    .delete_page(&page_id)
    .await
    .api_context("delete page")?;
  Ok(Json(json!({
    "message": "Page deleted successfully",
    "id": page_id,
  })))
}

async fn duplicate_page(
  State(state): State<SharedState>,
  Path(page_id): Path<String>,
  ApiQuery(params): ApiQuery<DuplicateParams>,
) -> ApiResult<(StatusCode, Json<Page>)> {
  let page = state
    .folder
    .duplicate_page(&page_id, params.include_blocks)
    .await
    .api_context("duplicate page")?;
  Ok((StatusCode::CREATED, Json(page)))
}

async fn move_page(
  State(state): State<SharedState>,
  Path(page_id): Path<String>,
  ApiQuery(params): ApiQuery<MoveParams>,
) -> ApiResult<Json<Page>> {
  let page = state
    .folder
    .move_page(&page_id, params.new_parent_id)
    .await
    .api_context("move page")?;
  Ok(Json(page))
}

async fn set_favorite(
  State(state): State<SharedState>,
  Path(page_id): Path<String>,
  ApiQuery(params): ApiQuery<FavoriteParams>,
) -> ApiResult<Json<Value>> {
  let page = state
    .folder
    .set_favorite(&page_id, params.is_favorite)
    .await
    .api_context("toggle favorite")?;
  let action = if params.is_favorite {
    "favorited"
  } else {
    "unfavorited"
  };
  Ok(Json(json!({
    "message": format!("Page {} successfully", action),
    "page": page,
  })))
}
