//! The `BookStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `shelf-store-sqlite`).
//! Higher layers (`shelf-api`, `shelf-server`) depend on this abstraction, not
//! on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::book::{Book, BookRecord};

/// Abstraction over a durable, keyed book store.
///
/// The store knows nothing about soft-delete transitions: `save` persists
/// exactly what it is given. Only [`BookStore::find_active_by_id`] looks at
/// the `deleted` flag.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait BookStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Insert a new book or write a stored one back under its key.
  ///
  /// - [`BookRecord::New`]: the store assigns `id` and `created_at`.
  /// - [`BookRecord::Stored`]: the store stamps `modified_at` and keeps the
  ///   previously stored `created_at`. A key the store never assigned is not
  ///   written.
  ///
  /// Returns the row as it reads back after the write, or `None` if nothing
  /// was written or it could not be read back.
  fn save(
    &self,
    record: BookRecord,
  ) -> impl Future<Output = Result<Option<Book>, Self::Error>> + Send + '_;

  /// Raw lookup by key. Soft-deleted books are returned too.
  fn find_by_id(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Book>, Self::Error>> + Send + '_;

  /// Lookup by key restricted to books that have not been soft-deleted.
  fn find_active_by_id(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Book>, Self::Error>> + Send + '_;
}
