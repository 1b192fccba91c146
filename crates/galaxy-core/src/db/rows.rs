//! Row decoding helpers shared by the table modules

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::Row;

use crate::constellation::Constellation;
use crate::idea::{Idea, IdeaStatus, KeywordCache, Position};
use crate::text::KeywordSet;
use crate::user::User;

pub(super) const IDEA_COLUMNS: &str =
    "id, user_id, title, description, status, pos_x, pos_y, keywords, created_at, updated_at";

pub(super) const USER_COLUMNS: &str = "id, email, name, created_at";

pub(super) const CONSTELLATION_COLUMNS: &str = "id, user_id, idea_id_1, idea_id_2, created_at";

fn conversion_error(
    idx: usize,
    ty: Type,
    err: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, ty, Box::new(err))
}

pub(super) fn parse_datetime(row: &Row, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| conversion_error(idx, Type::Text, e))
}

fn parse_status(row: &Row, idx: usize) -> rusqlite::Result<IdeaStatus> {
    let raw: String = row.get(idx)?;
    raw.parse()
        .map_err(|e: crate::error::GalaxyError| conversion_error(idx, Type::Text, e))
}

/// Decode a stored keyword cache; an unreadable cache is treated as missing
fn parse_keywords(id: &str, raw: Option<String>) -> KeywordCache {
    let stored = raw.and_then(|json| match serde_json::from_str::<KeywordSet>(&json) {
        Ok(keywords) => Some(keywords),
        Err(e) => {
            tracing::warn!(idea_id = id, error = %e, "ignoring unreadable keyword cache");
            None
        }
    });
    KeywordCache::from_stored(stored)
}

pub(super) fn encode_keywords(cache: &KeywordCache) -> crate::error::Result<Option<String>> {
    cache
        .get()
        .map(serde_json::to_string)
        .transpose()
        .map_err(Into::into)
}

pub(super) fn idea_from_row(row: &Row) -> rusqlite::Result<Idea> {
    let id: String = row.get(0)?;
    let keywords = parse_keywords(&id, row.get(7)?);
    Ok(Idea {
        user_id: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        status: parse_status(row, 4)?,
        position: Position {
            x: row.get(5)?,
            y: row.get(6)?,
        },
        keywords,
        created_at: parse_datetime(row, 8)?,
        updated_at: parse_datetime(row, 9)?,
        id,
    })
}

pub(super) fn user_from_row(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        email: row.get(1)?,
        name: row.get(2)?,
        created_at: parse_datetime(row, 3)?,
    })
}

pub(super) fn constellation_from_row(row: &Row) -> rusqlite::Result<Constellation> {
    Ok(Constellation {
        id: row.get(0)?,
        user_id: row.get(1)?,
        idea_id_1: row.get(2)?,
        idea_id_2: row.get(3)?,
        created_at: parse_datetime(row, 4)?,
    })
}
