use notebook_entity::{CodedError, ErrorCode};
use notebook_persistence::PersistenceError;

#[derive(Debug, thiserror::Error)]
pub enum CollaborationError {
  #[error(transparent)]
  Internal(#[from] anyhow::Error),

  #[error(transparent)]
  Persistence(#[from] PersistenceError),

  #[error("Comment not found: {0}")]
  CommentNotFound(String),

  #[error("Share not found: {0}")]
  ShareNotFound(String),

  #[error("Activity not found: {0}")]
  ActivityNotFound(String),

  #[error("User not found: {0}")]
  UserNotFound(String),

  #[error("User with this ID already exists: {0}")]
  UserAlreadyExists(String),
}

impl CodedError for CollaborationError {
  fn code(&self) -> ErrorCode {
    match self {
      CollaborationError::CommentNotFound(_)
      | CollaborationError::ShareNotFound(_)
      | CollaborationError::ActivityNotFound(_)
      | CollaborationError::UserNotFound(_) => ErrorCode::NotFound,
      CollaborationError::UserAlreadyExists(_) => ErrorCode::Conflict,
      CollaborationError::Internal(_) | CollaborationError::Persistence(_) => ErrorCode::Internal,
    }
  }
}
