//! Error types for `raci-core`.

use thiserror::Error;

/// Caller-supplied data violates a contract. Never fatal; the operation is
/// rejected without touching stored state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("activity title must not be blank")]
  BlankTitle,

  #[error("unknown role: {0:?}")]
  UnknownRole(String),

  #[error("role {0} assigned more than once")]
  DuplicateRole(&'static str),

  #[error("invalid responsibility code {0:?} (expected R, A, C, I or blank)")]
  InvalidCode(String),

  #[error("invalid activity id {0:?}")]
  InvalidId(String),
}

#[derive(Debug, Error)]
pub enum Error {
  #[error("validation error: {0}")]
  Validation(#[from] ValidationError),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
