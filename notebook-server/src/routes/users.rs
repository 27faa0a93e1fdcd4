use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use notebook_entity::User;

use crate::{ApiContext, ApiJson, ApiResult, SharedState};

pub fn routes() -> Router<SharedState> {
  Router::new()
    .route("/users", get(list_users).post(create_user))
    .route("/users/:user_id", get(get_user))
    .route("/users/email/:email", get(get_user_by_email))
}

async fn list_users(State(state): State<SharedState>) -> ApiResult<Json<Vec<User>>> {
  let users = state
    .collab
    .users
    .get_users()
    .await
    .api_context("fetch users")?;
  Ok(Json(users))
}

async fn get_user(
  State(state): State<SharedState>,
  Path(user_id): Path<String>,
) -> ApiResult<Json<User>> {
  let user = state
    .collab
    .users
    .get_user(&user_id)
    .await
    .api_context("fetch user")?;
  Ok(Json(user))
}

async fn get_user_by_email(
  State(state): State<SharedState>,
  Path(email): Path<String>,
) -> ApiResult<Json<User>> {
  let user = state
    .collab
    .users
    .get_user_by_email(&email)
    .await
    .api_context("fetch user")?;
  Ok(Json(user))
}

async fn create_user(
  State(state): State<SharedState>,
  ApiJson(user): ApiJson<User>,
) -> ApiResult<(StatusCode, Json<User>)> {
  let user = state
    .collab
    .users
    .create_user(user)
    .await
    .api_context("create user")?;
  Ok((StatusCode::CREATED, Json(user)))
}
