//! [`SqliteStore`] — the SQLite implementation of [`BookStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use shelf_core::{
  book::{Book, BookRecord},
  store::BookStore,
};

use crate::{
  encode::{encode_dt, encode_uuid, RawBook, BOOK_COLUMNS},
  schema::SCHEMA,
  Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A book store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Look up one row, optionally skipping soft-deleted books.
  async fn find(&self, id: Uuid, active_only: bool) -> Result<Option<Book>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawBook> = self
      .conn
      .call(move |conn| Ok(select_book(conn, &id_str, active_only)?))
      .await?;

    raw.map(RawBook::into_book).transpose()
  }
}

/// Read a single `book` row by its encoded id.
fn select_book(
  conn:        &rusqlite::Connection,
  id:          &str,
  active_only: bool,
) -> rusqlite::Result<Option<RawBook>> {
  let sql = if active_only {
    format!("SELECT {BOOK_COLUMNS} FROM book WHERE id = ?1 AND deleted = 0")
  } else {
    format!("SELECT {BOOK_COLUMNS} FROM book WHERE id = ?1")
  };
  conn
    .query_row(&sql, rusqlite::params![id], RawBook::from_row)
    .optional()
}

// ─── BookStore impl ──────────────────────────────────────────────────────────

impl BookStore for SqliteStore {
  type Error = crate::Error;

  async fn save(&self, record: BookRecord) -> Result<Option<Book>> {
    let now = Utc::now();

    let raw: Option<RawBook> = match record {
      BookRecord::New(book) => {
        let id_str = encode_uuid(Uuid::new_v4());
        let at_str = encode_dt(now);

        self
          .conn
          .call(move |conn| {
            conn.execute(
              "INSERT INTO book (id, title, synopsis, author, deleted, created_at, modified_at)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6, NULL)",
              rusqlite::params![
                id_str,
                book.title,
                book.synopsis,
                book.author,
                book.deleted,
                at_str,
              ],
            )?;
            Ok(select_book(conn, &id_str, false)?)
          })
          .await?
      }
      BookRecord::Stored(book) => {
        let id_str  = encode_uuid(book.id);
        let now_str = encode_dt(now);

        // Only existing rows are written; ids come from the insert path.
        // `created_at` is left alone and `modified_at` never precedes it.
        self
          .conn
          .call(move |conn| {
            let changed = conn.execute(
              "UPDATE book SET
                 title       = ?2,
                 synopsis    = ?3,
                 author      = ?4,
                 deleted     = ?5,
                 modified_at = MAX(?6, created_at)
               WHERE id = ?1",
              rusqlite::params![
                id_str,
                book.title,
                book.synopsis,
                book.author,
                book.deleted,
                now_str,
              ],
            )?;
            if changed == 0 {
              return Ok(None);
            }
            Ok(select_book(conn, &id_str, false)?)
          })
          .await?
      }
    };

    raw.map(RawBook::into_book).transpose()
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Book>> {
    self.find(id, false).await
  }

  async fn find_active_by_id(&self, id: Uuid) -> Result<Option<Book>> {
    self.find(id, true).await
  }
}
