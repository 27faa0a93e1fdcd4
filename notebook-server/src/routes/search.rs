use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use notebook_search::{SearchQuery, SearchResult};

use crate::{ApiContext, ApiQuery, ApiResult, SharedState};

pub fn routes() -> Router<SharedState> {
  Router::new().route("/search", get(search))
}

async fn search(
  State(state): State<SharedState>,
  ApiQuery(query): ApiQuery<SearchQuery>,
) -> ApiResult<Json<Vec<SearchResult>>> {
  let results = state
    .search
    .search(&query.q, query.scope)
    .await
    .api_context("search")?;
  Ok(Json(results))
}
