//! SQLite database module for galaxy

mod constellations;
mod ideas;
mod rows;
mod schema;
mod users;

use crate::error::{GalaxyError, Result};
use rusqlite::Connection;
use std::path::Path;

pub use schema::{create_schema, SchemaCreateResult, CURRENT_SCHEMA_VERSION};

/// Database file name inside the store directory
pub const DB_FILE: &str = "galaxy.db";

/// SQLite database for galaxy
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create the database in the given store root
    pub fn open(store_root: &Path) -> Result<Self> {
        let db_path = store_root.join(DB_FILE);
        let conn = Connection::open(&db_path).map_err(|e| {
            GalaxyError::Other(format!(
                "failed to open database at {}: {}",
                db_path.display(),
                e
            ))
        })?;

        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| GalaxyError::Other(format!("failed to enable WAL mode: {}", e)))?;

        Self::init(conn)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| GalaxyError::Other(format!("failed to open in-memory database: {}", e)))?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self> {
        match create_schema(&conn)
            .map_err(|e| GalaxyError::Other(format!("failed to create database schema: {}", e)))?
        {
            SchemaCreateResult::Created => tracing::info!("Created database schema"),
            SchemaCreateResult::Current => {}
            SchemaCreateResult::TooNew(version) => {
                return Err(GalaxyError::InvalidStore {
                    reason: format!(
                        "database schema version {} is newer than supported version {}",
                        version, CURRENT_SCHEMA_VERSION
                    ),
                });
            }
        }

        Ok(Database { conn })
    }

    pub fn get_schema_version(&self) -> Result<i32> {
        self.conn
            .query_row(
                "SELECT value FROM store_meta WHERE key = 'schema_version'",
                [],
                |r| {
                    let s: String = r.get(0)?;
                    Ok(s.parse().unwrap_or(0))
                },
            )
            .map_err(|e| GalaxyError::Other(format!("failed to get schema version: {}", e)))
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        // Checkpoint so rapid open/close cycles see each other's writes
        let _ = self.conn.pragma_update(None, "wal_checkpoint", "TRUNCATE");
    }
}
