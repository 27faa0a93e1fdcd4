use std::fmt::{Display, Formatter};

/// The kind of failure an operation ended with, independent of which
/// component produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
  /// A referenced identifier does not exist.
  NotFound,
  /// An identifier collides with an existing record on create.
  Conflict,
  /// A parent or foreign identifier does not exist.
  InvalidReference,
  /// The request is malformed, e.g. a reorder set that is not a permutation.
  InvalidInput,
  Internal,
}

impl ErrorCode {
  pub fn as_str(&self) -> &'static str {
    match self {
      ErrorCode::NotFound => "not_found",
      ErrorCode::Conflict => "conflict",
      ErrorCode::InvalidReference => "invalid_reference",
      ErrorCode::InvalidInput => "invalid_input",
      ErrorCode::Internal => "internal",
    }
  }
}

impl Display for ErrorCode {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Implemented by every component error so the request boundary can map
/// failures without knowing each error type.
pub trait CodedError: std::error::Error {
  fn code(&self) -> ErrorCode;
}
