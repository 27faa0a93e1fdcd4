use notebook_entity::define::PageId;
use notebook_entity::{CodedError, ErrorCode};
use notebook_persistence::PersistenceError;

#[derive(Debug, thiserror::Error)]
pub enum FolderError {
  #[error(transparent)]
  Internal(#[from] anyhow::Error),

  #[error(transparent)]
  Persistence(#[from] PersistenceError),

  #[error("Page not found: {0}")]
  PageNotFound(PageId),

  #[error("Page with this ID already exists: {0}")]
  PageAlreadyExists(PageId),

  #[error("Parent page not found: {0}")]
  ParentNotFound(PageId),
}

impl CodedError for FolderError {
  fn code(&self) -> ErrorCode {
    match self {
      FolderError::PageNotFound(_) => ErrorCode::NotFound,
      FolderError::PageAlreadyExists(_) => ErrorCode::Conflict,
      FolderError::ParentNotFound(_) => ErrorCode::InvalidReference,
      FolderError::Internal(_) | FolderError::Persistence(_) => ErrorCode::Internal,
    }
  }
}
