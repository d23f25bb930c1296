//! SQL schema for the Reach SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Rows are append-only. The only statement besides INSERT ever issued
-- against this table is DELETE by id.
CREATE TABLE IF NOT EXISTS analyses (
    id             TEXT PRIMARY KEY,
    text           TEXT NOT NULL,
    tone           TEXT NOT NULL,
    emoji_level    INTEGER NOT NULL,   -- 0 | 1 | 2
    analysis       TEXT,
    reach_score    INTEGER,            -- reserved, always NULL
    risk_level     TEXT,               -- reserved, always NULL
    blockers       TEXT,               -- reserved, always NULL
    suggested_hook TEXT,               -- reserved, always NULL
    created_at     TEXT NOT NULL       -- fixed-width RFC 3339 UTC
);

CREATE INDEX IF NOT EXISTS analyses_created_idx ON analyses(created_at);

PRAGMA user_version = 1;
";
