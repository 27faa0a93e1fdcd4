use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use notebook_entity::{CodedError, ErrorCode};
use serde_json::json;
use tracing::{error, warn};

pub type ApiResult<T> = Result<T, ApiError>;

/// A failed request. The message names the operation that failed and why,
/// e.g. `Failed to fetch page: Page not found: p1`.
#[derive(Debug, thiserror::Error)]
#[error("Failed to {operation}: {message}")]
pub struct ApiError {
  pub operation: &'static str,
  pub code: ErrorCode,
  pub message: String,
}

impl ApiError {
  pub fn new<E: CodedError>(operation: &'static str, err: E) -> Self {
    Self {
      operation,
      code: err.code(),
      message: err.to_string(),
    }
  }

  pub fn invalid_input<M: Into<String>>(operation: &'static str, message: M) -> Self {
    Self {
      operation,
      code: ErrorCode::InvalidInput,
      message: message.into(),
    }
  }

  pub fn status(&self) -> StatusCode {
    match self.code {
      ErrorCode::NotFound => StatusCode::NOT_FOUND,
      ErrorCode::Conflict | ErrorCode::InvalidReference | ErrorCode::InvalidInput => {
        StatusCode::BAD_REQUEST
      },
      ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    if status.is_server_error() {
      error!("{}", self);
    } else {
      warn!("{}", self);
    }

    let body = Json(json!({
      "error": {
        "message": self.to_string(),
        "code": self.code.as_str(),
      }
    }));
    (status, body).into_response()
  }
}

/// Attaches the failing operation to a component error.
pub trait ApiContext<T> {
  fn api_context(self, operation: &'static str) -> ApiResult<T>;
}

impl<T, E: CodedError> ApiContext<T> for Result<T, E> {
  fn api_context(self, operation: &'static str) -> ApiResult<T> {
    self.map_err(|err| ApiError::new(operation, err))
  }
}
