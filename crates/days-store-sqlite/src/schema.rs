//! SQL schema for the Days SQLite store.
//!
//! Executed once at connection startup. The header/field split means new
//! catalog fields never need a schema change.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- One header row per journal date.
CREATE TABLE IF NOT EXISTS entries (
    date      TEXT PRIMARY KEY,   -- YYYY-MM-DD
    timestamp TEXT NOT NULL       -- RFC 3339 UTC; server-assigned on save
);

-- One row per (date, catalog field). A NULL value means the field is unset.
CREATE TABLE IF NOT EXISTS details (
    date     TEXT NOT NULL,
    field_id TEXT NOT NULL,
    value    TEXT,
    PRIMARY KEY (date, field_id),
    FOREIGN KEY (date) REFERENCES entries(date) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_details_date ON details(date);
";
