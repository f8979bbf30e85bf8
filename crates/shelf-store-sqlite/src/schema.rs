//! SQL schema for the Shelf SQLite store.
//!
//! Executed once at connection startup. `PRAGMA user_version` records the
//! schema revision.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Rows are never deleted; `deleted` marks a soft delete.
CREATE TABLE IF NOT EXISTS book (
    id          TEXT PRIMARY KEY,
    title       TEXT NOT NULL,
    synopsis    TEXT NOT NULL,
    author      TEXT NOT NULL,
    deleted     INTEGER NOT NULL DEFAULT 0,
    created_at  TEXT NOT NULL,   -- RFC 3339 UTC; written once
    modified_at TEXT             -- RFC 3339 UTC; NULL until first update
);

CREATE INDEX IF NOT EXISTS book_deleted_idx ON book(deleted);

PRAGMA user_version = 1;
";
