use notebook_entity::define::BlockId;
use notebook_entity::{CodedError, ErrorCode};
use notebook_persistence::PersistenceError;

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
  #[error(transparent)]
  Internal(#[from] anyhow::Error),

  #[error(transparent)]
  Persistence(#[from] PersistenceError),

  #[error("The block already exists: {0}")]
  BlockAlreadyExists(BlockId),

  #[error("The block is not found: {0}")]
  BlockIsNotFound(BlockId),

  #[error("Invalid block IDs provided: {0}")]
  InvalidReorder(String),
}

impl CodedError for DocumentError {
  fn code(&self) -> ErrorCode {
    match self {
      DocumentError::BlockAlreadyExists(_) => ErrorCode::Conflict,
      DocumentError::BlockIsNotFound(_) => ErrorCode::NotFound,
      DocumentError::InvalidReorder(_) => ErrorCode::InvalidInput,
      DocumentError::Internal(_) | DocumentError::Persistence(_) => ErrorCode::Internal,
    }
  }
}
