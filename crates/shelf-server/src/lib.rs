//! HTTP server wiring for Shelf.
//!
//! Loads [`ServerConfig`], opens the SQLite store, and wraps the
//! [`shelf_api`] router in request tracing.

pub mod config;

use std::sync::Arc;

use axum::Router;
use shelf_core::{service::BookService, store::BookStore};
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;

/// Build the application router for `store` with per-request tracing spans.
pub fn app<S>(store: Arc<S>) -> Router
where
  S: BookStore + 'static,
{
  shelf_api::api_router(BookService::new(store)).layer(TraceLayer::new_for_http())
}
