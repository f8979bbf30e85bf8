//! JSON REST API for Shelf.
//!
//! Exposes an axum [`Router`] backed by a [`BookService`] over any
//! [`shelf_core::store::BookStore`]. TLS and transport concerns are the
//! caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = shelf_api::api_router(BookService::new(store));
//! ```

pub mod books;
pub mod error;

use axum::{Router, routing::{get, post}};
use shelf_core::{service::BookService, store::BookStore};

pub use error::ApiError;

/// Build a fully-materialised API router for `service`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(service: BookService<S>) -> Router<()>
where
  S: BookStore + 'static,
{
  Router::new()
    .route("/v1/books", post(books::create::<S>))
    .route(
      "/v1/books/{id}",
      get(books::get_one::<S>).delete(books::delete_one::<S>),
    )
    .with_state(service)
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
  };
  use serde_json::{Value, json};
  use shelf_store_sqlite::SqliteStore;
  use tower::ServiceExt as _;
  use uuid::Uuid;

  use super::*;

  async fn make_app() -> (Router, Arc<SqliteStore>) {
    let store = Arc::new(SqliteStore::open_in_memory().await.unwrap());
    (api_router(BookService::new(Arc::clone(&store))), store)
  }

  async fn make_router() -> Router { make_app().await.0 }

  async fn oneshot_raw(
    app:    Router,
    method: &str,
    uri:    &str,
    body:   Option<&str>,
  ) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
      builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let req = builder
      .body(Body::from(body.unwrap_or_default().to_string()))
      .unwrap();
    app.oneshot(req).await.unwrap()
  }

  /// POST `body` without a `Content-Type` header.
  async fn post_untyped(app: Router, body: &str) -> Response {
    let req = Request::builder()
      .method("POST")
      .uri("/v1/books")
      .body(Body::from(body.to_string()))
      .unwrap();
    app.oneshot(req).await.unwrap()
  }

  async fn json_body(resp: Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
      .await
      .unwrap();
    serde_json::from_slice(&bytes).unwrap()
  }

  async fn create_book(app: &Router) -> Value {
    let body = json!({ "title": "T", "synopsis": "S", "author": "A" }).to_string();
    let resp = oneshot_raw(app.clone(), "POST", "/v1/books", Some(&body)).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    json_body(resp).await
  }

  // ── POST ────────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn create_returns_201_with_generated_id() {
    let app  = make_router().await;
    let book = create_book(&app).await;

    assert!(Uuid::parse_str(book["id"].as_str().unwrap()).is_ok());
    assert_eq!(book["title"], "T");
    assert_eq!(book["synopsis"], "S");
    assert_eq!(book["author"], "A");
    assert_eq!(book["deleted"], false);
    assert!(book["createdAt"].is_string());
    assert!(book["modifiedAt"].is_null());
  }

  #[tokio::test]
  async fn create_with_blank_title_returns_400() {
    let app  = make_router().await;
    let body = json!({ "title": "   ", "synopsis": "S", "author": "A" }).to_string();

    let resp = oneshot_raw(app, "POST", "/v1/books", Some(&body)).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(resp).await["error"], "Title is required");
  }

  #[tokio::test]
  async fn create_with_missing_author_returns_400() {
    let app  = make_router().await;
    let body = json!({ "title": "T", "synopsis": "S" }).to_string();

    let resp = oneshot_raw(app, "POST", "/v1/books", Some(&body)).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(resp).await["error"], "Author is required");
  }

  #[tokio::test]
  async fn create_with_null_body_returns_400() {
    let app  = make_router().await;
    let resp = oneshot_raw(app, "POST", "/v1/books", Some("null")).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(resp).await["error"].is_string());
  }

  #[tokio::test]
  async fn create_with_wrongly_typed_field_returns_400_json() {
    let app  = make_router().await;
    let body = json!({ "title": 5, "synopsis": "S", "author": "A" }).to_string();

    let resp = oneshot_raw(app, "POST", "/v1/books", Some(&body)).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(resp).await["error"].is_string());
  }

  #[tokio::test]
  async fn create_with_malformed_json_returns_400_json() {
    let app  = make_router().await;
    let resp = oneshot_raw(app, "POST", "/v1/books", Some("{not json")).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(resp).await["error"].is_string());
  }

  #[tokio::test]
  async fn create_without_content_type_returns_400_json() {
    let app  = make_router().await;
    let body = json!({ "title": "T", "synopsis": "S", "author": "A" }).to_string();

    let resp = post_untyped(app, &body).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(resp).await["error"].is_string());
  }

  // ── GET ─────────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn get_returns_active_book() {
    let app  = make_router().await;
    let book = create_book(&app).await;
    let uri  = format!("/v1/books/{}", book["id"].as_str().unwrap());

    let resp = oneshot_raw(app, "GET", &uri, None).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await, book);
  }

  #[tokio::test]
  async fn get_nonexistent_returns_404() {
    let app  = make_router().await;
    let resp = oneshot_raw(app, "GET", &format!("/v1/books/{}", Uuid::new_v4()), None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  // ── DELETE ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn delete_existing_returns_204_and_get_returns_404() {
    let app  = make_router().await;
    let book = create_book(&app).await;
    let uri  = format!("/v1/books/{}", book["id"].as_str().unwrap());

    let del_resp = oneshot_raw(app.clone(), "DELETE", &uri, None).await;
    assert_eq!(del_resp.status(), StatusCode::NO_CONTENT);

    let get_resp = oneshot_raw(app, "GET", &uri, None).await;
    assert_eq!(get_resp.status(), StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn repeated_delete_returns_204_and_leaves_row_untouched() {
    let (app, store) = make_app().await;
    let book = create_book(&app).await;
    let uri  = format!("/v1/books/{}", book["id"].as_str().unwrap());
    let id   = Uuid::parse_str(book["id"].as_str().unwrap()).unwrap();

    let first = oneshot_raw(app.clone(), "DELETE", &uri, None).await;
    assert_eq!(first.status(), StatusCode::NO_CONTENT);
    let after_first = store.find_by_id(id).await.unwrap().expect("row is kept");

    let second = oneshot_raw(app, "DELETE", &uri, None).await;
    assert_eq!(second.status(), StatusCode::NO_CONTENT);
    let after_second = store.find_by_id(id).await.unwrap().expect("row is kept");

    assert!(after_first.deleted);
    assert!(after_first.modified_at.is_some());
    assert_eq!(after_second, after_first);
  }

  #[tokio::test]
  async fn delete_nonexistent_returns_404() {
    let app  = make_router().await;
    let uri  = format!("/v1/books/{}", Uuid::new_v4());
    let resp = oneshot_raw(app, "DELETE", &uri, None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }
}
