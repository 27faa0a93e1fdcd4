use notebook_entity::{CodedError, ErrorCode};
use notebook_persistence::PersistenceError;

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
  #[error(transparent)]
  Internal(#[from] anyhow::Error),

  #[error(transparent)]
  Persistence(#[from] PersistenceError),
}

impl CodedError for SearchError {
  fn code(&self) -> ErrorCode {
    ErrorCode::Internal
  }
}
