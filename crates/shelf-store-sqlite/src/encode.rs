//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as fixed-width RFC 3339 strings (microsecond
//! precision, `Z` suffix) so that SQL string comparison orders them
//! chronologically. UUIDs are stored as hyphenated lowercase strings.

use chrono::{DateTime, SecondsFormat, Utc};
use shelf_core::book::Book;
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Column list shared by every `SELECT` against `book`, in [`RawBook`] order.
pub const BOOK_COLUMNS: &str =
  "id, title, synopsis, author, deleted, created_at, modified_at";

/// Raw values read directly from a `book` row.
pub struct RawBook {
  pub id:          String,
  pub title:       String,
  pub synopsis:    String,
  pub author:      String,
  pub deleted:     bool,
  pub created_at:  String,
  pub modified_at: Option<String>,
}

impl RawBook {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:          row.get(0)?,
      title:       row.get(1)?,
      synopsis:    row.get(2)?,
      author:      row.get(3)?,
      deleted:     row.get(4)?,
      created_at:  row.get(5)?,
      modified_at: row.get(6)?,
    })
  }

  pub fn into_book(self) -> Result<Book> {
    Ok(Book {
      id:          decode_uuid(&self.id)?,
      title:       self.title,
      synopsis:    self.synopsis,
      author:      self.author,
      deleted:     self.deleted,
      created_at:  decode_dt(&self.created_at)?,
      modified_at: self.modified_at.as_deref().map(decode_dt).transpose()?,
    })
  }
}
