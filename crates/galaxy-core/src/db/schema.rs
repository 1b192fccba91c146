//! SQLite database schema for galaxy

use rusqlite::{Connection, Result};

pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Result of schema creation
#[derive(Debug, PartialEq, Eq)]
pub enum SchemaCreateResult {
    /// Fresh database, schema created
    Created,
    /// Existing database at the current version
    Current,
    /// Database written by a newer galaxy
    TooNew(i32),
}

const SCHEMA_SQL: &str = r#"
-- Accounts
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    email TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL,
    created_at TEXT NOT NULL
);

-- Ideas; keywords holds the JSON keyword cache (NULL when not computed)
CREATE TABLE IF NOT EXISTS ideas (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    status TEXT NOT NULL,
    pos_x REAL NOT NULL DEFAULT 0.5,
    pos_y REAL NOT NULL DEFAULT 0.5,
    keywords TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_ideas_user ON ideas(user_id);
CREATE INDEX IF NOT EXISTS idx_ideas_status ON ideas(status);

-- Links between two ideas of one user
CREATE TABLE IF NOT EXISTS constellations (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    idea_id_1 TEXT NOT NULL,
    idea_id_2 TEXT NOT NULL,
    created_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_constellations_user ON constellations(user_id);

-- Store metadata
CREATE TABLE IF NOT EXISTS store_meta (
    key TEXT PRIMARY KEY,
    value TEXT
);
"#;

pub fn create_schema(conn: &Connection) -> Result<SchemaCreateResult> {
    let current_version: Option<i32> = conn
        .query_row(
            "SELECT value FROM store_meta WHERE key = 'schema_version'",
            [],
            |r| r.get::<_, String>(0).map(|s| s.parse().unwrap_or(0)),
        )
        .ok();

    match current_version {
        None => {
            conn.execute_batch(SCHEMA_SQL)?;
            conn.execute(
                "INSERT OR REPLACE INTO store_meta (key, value) VALUES ('schema_version', ?1)",
                [&CURRENT_SCHEMA_VERSION.to_string()],
            )?;
            Ok(SchemaCreateResult::Created)
        }
        Some(v) if v > CURRENT_SCHEMA_VERSION => Ok(SchemaCreateResult::TooNew(v)),
        Some(_) => {
            // CREATE ... IF NOT EXISTS keeps this idempotent for older stores
            conn.execute_batch(SCHEMA_SQL)?;
            Ok(SchemaCreateResult::Current)
        }
    }
}
