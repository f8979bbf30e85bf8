//! Book lifecycle service.
//!
//! The single place that decides what it means to create and soft-delete a
//! book. It owns no storage; every write goes through [`BookStore::save`].
//!
//! `delete_by_id` reads and then conditionally writes without a transaction.
//! Two concurrent deletes of the same id can both observe an active book and
//! both call `save`. The outcome is the same row state, only written twice.

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
  Error, Result,
  book::{Book, BookRequest},
  store::BookStore,
};

/// Creates, reads, and soft-deletes books on top of a [`BookStore`].
pub struct BookService<S> {
  store: Arc<S>,
}

impl<S> Clone for BookService<S> {
  fn clone(&self) -> Self {
    Self { store: Arc::clone(&self.store) }
  }
}

impl<S: BookStore> BookService<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  /// Validate `request` and persist it as a new, active book.
  ///
  /// Fails with [`Error::InvalidArgument`] when the request is absent and
  /// with [`Error::Validation`] when a required field is missing or blank;
  /// the store is not touched in either case. A store that accepts the write
  /// but returns no row yields [`Error::InconsistentState`].
  pub async fn create(
    &self,
    request: impl Into<Option<BookRequest>>,
  ) -> Result<Book> {
    let request = request
      .into()
      .ok_or(Error::InvalidArgument("book request must not be absent"))?;
    let new_book = request.validate()?;

    let book = self
      .store
      .save(new_book.into())
      .await
      .map_err(Error::store)?
      .ok_or_else(|| {
        warn!("store acknowledged insert but returned no book");
        Error::InconsistentState(
          "store returned no book after insert".to_owned(),
        )
      })?;

    info!(book_id = %book.id, "book created");
    Ok(book)
  }

  /// Return the book with `id` unless it is missing or soft-deleted.
  pub async fn get_by_id(&self, id: Uuid) -> Result<Book> {
    self
      .store
      .find_active_by_id(id)
      .await
      .map_err(Error::store)?
      .ok_or(Error::NotFound(id))
  }

  /// Soft-delete the book with `id`.
  ///
  /// Deleting an already-deleted book succeeds without writing anything.
  pub async fn delete_by_id(&self, id: Uuid) -> Result<()> {
    let mut book = self
      .store
      .find_by_id(id)
      .await
      .map_err(Error::store)?
      .ok_or(Error::NotFound(id))?;

    if book.deleted {
      debug!(book_id = %id, "book already deleted");
      return Ok(());
    }

    book.deleted = true;
    let saved = self.store.save(book.into()).await.map_err(Error::store)?;
    if saved.is_none() {
      warn!(book_id = %id, "store acknowledged soft delete but returned no book");
    }

    info!(book_id = %id, "book deleted");
    Ok(())
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
