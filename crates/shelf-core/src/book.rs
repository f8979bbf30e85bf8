//! Book types — the single entity managed by Shelf.
//!
//! A book is never physically removed. Deletion flips the `deleted` flag and
//! the row stays retrievable by raw key lookup.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Book ────────────────────────────────────────────────────────────────────

/// A persisted book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
  /// Store-assigned; never changes and is never reused.
  pub id:          Uuid,
  pub title:       String,
  pub synopsis:    String,
  pub author:      String,
  /// Soft-delete flag. Once `true` it stays `true`.
  pub deleted:     bool,
  /// Set exactly once, by the store, on first insert.
  pub created_at:  DateTime<Utc>,
  /// Set by the store on every save of an existing row.
  pub modified_at: Option<DateTime<Utc>>,
}

impl Book {
  pub fn is_active(&self) -> bool { !self.deleted }
}

// ─── NewBook ─────────────────────────────────────────────────────────────────

/// A book that has not been persisted yet.
/// `id` and the timestamps are always set by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
  pub title:    String,
  pub synopsis: String,
  pub author:   String,
  pub deleted:  bool,
}

impl NewBook {
  /// Constructor for an active book.
  pub fn new(
    title: impl Into<String>,
    synopsis: impl Into<String>,
    author: impl Into<String>,
  ) -> Self {
    Self {
      title:    title.into(),
      synopsis: synopsis.into(),
      author:   author.into(),
      deleted:  false,
    }
  }
}

// ─── BookRecord ──────────────────────────────────────────────────────────────

/// Input to [`crate::store::BookStore::save`]: either a fresh book to insert
/// or a stored book to write back under its existing key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookRecord {
  New(NewBook),
  Stored(Book),
}

impl From<NewBook> for BookRecord {
  fn from(book: NewBook) -> Self { Self::New(book) }
}

impl From<Book> for BookRecord {
  fn from(book: Book) -> Self { Self::Stored(book) }
}

// ─── BookRequest ─────────────────────────────────────────────────────────────

/// Caller-supplied fields for creating a book. Missing JSON fields decode to
/// `None` so that validation, not deserialisation, reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BookRequest {
  #[serde(default)]
  pub title:    Option<String>,
  #[serde(default)]
  pub synopsis: Option<String>,
  #[serde(default)]
  pub author:   Option<String>,
}

impl BookRequest {
  pub fn new(
    title: impl Into<String>,
    synopsis: impl Into<String>,
    author: impl Into<String>,
  ) -> Self {
    Self {
      title:    Some(title.into()),
      synopsis: Some(synopsis.into()),
      author:   Some(author.into()),
    }
  }

  /// Check every required field in order (title, synopsis, author) and turn
  /// the request into a [`NewBook`]. Values are kept exactly as supplied.
  pub fn validate(self) -> Result<NewBook> {
    let title = required(self.title, "Title is required")?;
    let synopsis = required(self.synopsis, "Synopsis is required")?;
    let author = required(self.author, "Author is required")?;
    Ok(NewBook::new(title, synopsis, author))
  }
}

fn required(value: Option<String>, message: &str) -> Result<String> {
  match value {
    Some(v) if !v.trim().is_empty() => Ok(v),
    _ => Err(Error::Validation(message.to_owned())),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn new_book_defaults_to_active() {
    let book = NewBook::new("T", "S", "A");
    assert!(!book.deleted);
  }

  #[test]
  fn validate_keeps_values_untrimmed() {
    let book = BookRequest::new("  Padded  ", "S", "A").validate().unwrap();
    assert_eq!(book.title, "  Padded  ");
  }

  #[test]
  fn validate_reports_first_missing_field() {
    let req = BookRequest { title: Some("T".into()), synopsis: None, author: None };
    let err = req.validate().unwrap_err();
    assert_eq!(err.to_string(), "Synopsis is required");
  }

  #[test]
  fn validate_rejects_blank_author() {
    let err = BookRequest::new("T", "S", " \t\n").validate().unwrap_err();
    assert!(matches!(err, Error::Validation(m) if m == "Author is required"));
  }

  #[test]
  fn book_serialises_camel_case() {
    let book = Book {
      id:          Uuid::nil(),
      title:       "T".into(),
      synopsis:    "S".into(),
      author:      "A".into(),
      deleted:     false,
      created_at:  Utc::now(),
      modified_at: None,
    };
    let json = serde_json::to_value(&book).unwrap();
    assert!(json.get("createdAt").is_some());
    assert_eq!(json["modifiedAt"], serde_json::Value::Null);
    assert_eq!(json["deleted"], serde_json::Value::Bool(false));
  }
}
