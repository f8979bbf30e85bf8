//! Error types for `shelf-core`.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  /// The caller supplied no request at all.
  #[error("invalid argument: {0}")]
  InvalidArgument(&'static str),

  /// A required field was absent or blank.
  #[error("{0}")]
  Validation(String),

  /// The store acknowledged a write but handed back no usable record.
  #[error("inconsistent state: {0}")]
  InconsistentState(String),

  #[error("book not found: {0}")]
  NotFound(Uuid),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub(crate) fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
