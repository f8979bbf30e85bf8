//! Handlers for `/v1/books` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/v1/books` | Body: [`BookRequest`]; returns 201 + stored book |
//! | `GET`    | `/v1/books/:id` | 404 if missing or soft-deleted |
//! | `DELETE` | `/v1/books/:id` | Soft delete; 204, repeatable; 404 if missing |

use axum::{
  Json,
  extract::{Path, State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
};
use shelf_core::{
  book::{Book, BookRequest},
  service::BookService,
  store::BookStore,
};
use uuid::Uuid;

use crate::error::ApiError;

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /v1/books` — a JSON `null` body is rejected as an absent request.
/// Undecodable bodies are reported as 400 with the usual error body.
pub async fn create<S>(
  State(service): State<BookService<S>>,
  body: Result<Json<Option<BookRequest>>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: BookStore + 'static,
{
  let Json(body) = body?;
  let book = service.create(body).await?;
  Ok((StatusCode::CREATED, Json(book)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /v1/books/:id`
pub async fn get_one<S>(
  State(service): State<BookService<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Book>, ApiError>
where
  S: BookStore + 'static,
{
  Ok(Json(service.get_by_id(id).await?))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /v1/books/:id`
pub async fn delete_one<S>(
  State(service): State<BookService<S>>,
  Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
  S: BookStore + 'static,
{
  service.delete_by_id(id).await?;
  Ok(StatusCode::NO_CONTENT)
}
