//! SQL schema for the RACI SQLite store.
//!
//! Executed at every connection startup. `PRAGMA user_version` records the
//! schema revision so future migrations can be gated on it.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- AUTOINCREMENT keeps ids monotonic: a deleted id is never handed out again.
CREATE TABLE IF NOT EXISTS activities (
    id                 INTEGER PRIMARY KEY AUTOINCREMENT,
    title              TEXT NOT NULL CHECK (length(trim(title)) > 0),
    ceo                TEXT CHECK (ceo                IN ('', 'R', 'A', 'C', 'I')),
    area_president     TEXT CHECK (area_president     IN ('', 'R', 'A', 'C', 'I')),
    executive_director TEXT CHECK (executive_director IN ('', 'R', 'A', 'C', 'I')),
    board_advisor      TEXT CHECK (board_advisor      IN ('', 'R', 'A', 'C', 'I')),
    executive_manager  TEXT CHECK (executive_manager  IN ('', 'R', 'A', 'C', 'I'))
);

PRAGMA user_version = 1;
";

/// Role columns in canonical role order.
pub const ROLE_COLUMNS: [&str; 5] = [
  "ceo",
  "area_president",
  "executive_director",
  "board_advisor",
  "executive_manager",
];
