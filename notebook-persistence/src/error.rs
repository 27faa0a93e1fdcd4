use notebook_entity::{CodedError, ErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
  #[error("{family} store io error: {source}")]
  Io {
    family: &'static str,
    #[source]
    source: std::io::Error,
  },

  #[error("{family} store holds invalid data: {source}")]
  SerdeJson {
    family: &'static str,
    #[source]
    source: serde_json::Error,
  },

  #[error(transparent)]
  Internal(#[from] anyhow::Error),
}

impl PersistenceError {
  pub(crate) fn io(family: &'static str, source: std::io::Error) -> Self {
    Self::Io { family, source }
  }

  pub(crate) fn serde_json(family: &'static str, source: serde_json::Error) -> Self {
    Self::SerdeJson { family, source }
  }
}

impl CodedError for PersistenceError {
  fn code(&self) -> ErrorCode {
    ErrorCode::Internal
  }
}
