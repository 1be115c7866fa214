//! Error type for `raci-store-sqlite`.

use raci_core::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("validation error: {0}")]
  Validation(#[from] ValidationError),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// A stored row holds a value the schema should never have admitted.
  #[error("corrupt row {id}: {reason}")]
  Corrupt { id: i64, reason: String },
}

/// Coarse classification for callers deciding how to report a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  /// The caller's input was rejected; nothing was written.
  Validation,
  /// Persistence failed or returned unreadable data.
  Storage,
}

impl Error {
  pub fn kind(&self) -> ErrorKind {
    match self {
      Error::Validation(_) => ErrorKind::Validation,
      Error::Database(_) | Error::Corrupt { .. } => ErrorKind::Storage,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
