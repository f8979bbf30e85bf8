//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  /// Store faults and inconsistent store results.
  #[error("internal error: {0}")]
  Internal(#[source] shelf_core::Error),
}

impl From<shelf_core::Error> for ApiError {
  fn from(e: shelf_core::Error) -> Self {
    use shelf_core::Error as Core;
    match e {
      Core::InvalidArgument(m) => ApiError::BadRequest(m.to_owned()),
      Core::Validation(m) => ApiError::BadRequest(m),
      Core::NotFound(id) => ApiError::NotFound(format!("book {id} not found")),
      e @ (Core::InconsistentState(_) | Core::Store(_)) => ApiError::Internal(e),
    }
  }
}

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    ApiError::BadRequest(rejection.body_text())
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Internal(e) => {
        tracing::error!(error = %e, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
