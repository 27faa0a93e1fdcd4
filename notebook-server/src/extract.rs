use axum::Json;
use axum::async_trait;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;

use crate::ApiError;

/// [`Json`] whose rejection is reported as an [`ApiError`].
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
  Json<T>: FromRequest<S, Rejection = JsonRejection>,
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
    match Json::<T>::from_request(req, state).await {
      Ok(Json(value)) => Ok(Self(value)),
      Err(rejection) => Err(ApiError::invalid_input(
        "read request body",
        rejection.body_text(),
      )),
    }
  }
}

/// [`Query`] whose rejection is reported as an [`ApiError`].
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
  Query<T>: FromRequestParts<S, Rejection = QueryRejection>,
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
    match Query::<T>::from_request_parts(parts, state).await {
      Ok(Query(value)) => Ok(Self(value)),
      Err(rejection) => Err(ApiError::invalid_input(
        "read query parameters",
        rejection.body_text(),
      )),
    }
  }
}
