use std::collections::HashMap;

use rusqlite::{params, OptionalExtension};

use super::rows::{user_from_row, USER_COLUMNS};
use crate::error::{GalaxyError, Result};
use crate::map_db_err;
use crate::user::User;

impl super::Database {
    pub fn insert_user(&self, user: &User) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO users (id, email, name, created_at) VALUES (?1, ?2, ?3, ?4)",
                params![user.id, user.email, user.name, user.created_at.to_rfc3339()],
            )
            .map_err(|e| match e {
                rusqlite::Error::SqliteFailure(err, _)
                    if err.code == rusqlite::ErrorCode::ConstraintViolation =>
                {
                    GalaxyError::already_exists("email", &user.email)
                }
                other => map_db_err!("insert user", other),
            })?;
        Ok(())
    }

    pub fn get_user(&self, id: &str) -> Result<Option<User>> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM users WHERE id = ?1", USER_COLUMNS),
                params![id],
                user_from_row,
            )
            .optional()
            .map_err(|e| map_db_err!("get user", e))
    }

    pub fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM users WHERE email = ?1", USER_COLUMNS),
                params![email],
                user_from_row,
            )
            .optional()
            .map_err(|e| map_db_err!("get user by email", e))
    }

    /// Display names keyed by user id, for every id that exists
    pub fn user_names(&self, ids: &[&str]) -> Result<HashMap<String, String>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT id, name FROM users WHERE id = ?1")
            .map_err(|e| map_db_err!("prepare user name query", e))?;

        let mut names = HashMap::new();
        for id in ids {
            if names.contains_key(*id) {
                continue;
            }
            let name: Option<String> = stmt
                .query_row(params![id], |row| row.get(1))
                .optional()
                .map_err(|e| map_db_err!("get user name", e))?;
            if let Some(name) = name {
                names.insert(id.to_string(), name);
            }
        }
        Ok(names)
    }

    pub fn count_users(&self) -> Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM users", [], |r| r.get(0))
            .map_err(|e| map_db_err!("count users", e))
    }
}
