use rusqlite::{params, params_from_iter, OptionalExtension};

use super::rows::{encode_keywords, idea_from_row, IDEA_COLUMNS};
use crate::error::Result;
use crate::idea::{Idea, IdeaStatus, KeywordCache};
use crate::map_db_err;

fn status_placeholders(statuses: &[IdeaStatus], first_param: usize) -> String {
    (0..statuses.len())
        .map(|i| format!("?{}", first_param + i))
        .collect::<Vec<_>>()
        .join(", ")
}

impl super::Database {
    pub fn insert_idea(&self, idea: &Idea) -> Result<()> {
        let keywords = encode_keywords(&idea.keywords)?;
        self.conn
            .execute(
                "INSERT INTO ideas (id, user_id, title, description, status, pos_x, pos_y, keywords, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                params![
                    idea.id,
                    idea.user_id,
                    idea.title,
                    idea.description,
                    idea.status.as_str(),
                    idea.position.x,
                    idea.position.y,
                    keywords,
                    idea.created_at.to_rfc3339(),
                    idea.updated_at.to_rfc3339(),
                ],
            )
            .map_err(|e| map_db_err!(&format!("insert idea {}", idea.id), e))?;
        Ok(())
    }

    /// Write back every mutable field of an existing idea
    pub fn update_idea(&self, idea: &Idea) -> Result<()> {
        let keywords = encode_keywords(&idea.keywords)?;
        self.conn
            .execute(
                "UPDATE ideas SET title = ?2, description = ?3, status = ?4, pos_x = ?5, pos_y = ?6, keywords = ?7, updated_at = ?8 WHERE id = ?1",
                params![
                    idea.id,
                    idea.title,
                    idea.description,
                    idea.status.as_str(),
                    idea.position.x,
                    idea.position.y,
                    keywords,
                    idea.updated_at.to_rfc3339(),
                ],
            )
            .map_err(|e| map_db_err!(&format!("update idea {}", idea.id), e))?;
        Ok(())
    }

    /// Replace only the keyword cache of an idea
    pub fn update_keywords(&self, idea_id: &str, cache: &KeywordCache) -> Result<()> {
        let keywords = encode_keywords(cache)?;
        self.conn
            .execute(
                "UPDATE ideas SET keywords = ?2 WHERE id = ?1",
                params![idea_id, keywords],
            )
            .map_err(|e| map_db_err!(&format!("update keywords of idea {}", idea_id), e))?;
        Ok(())
    }

    pub fn get_idea(&self, id: &str) -> Result<Option<Idea>> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM ideas WHERE id = ?1", IDEA_COLUMNS),
                params![id],
                idea_from_row,
            )
            .optional()
            .map_err(|e| map_db_err!("get idea", e))
    }

    /// An idea, only if it belongs to `user_id`
    pub fn get_user_idea(&self, id: &str, user_id: &str) -> Result<Option<Idea>> {
        self.conn
            .query_row(
                &format!(
                    "SELECT {} FROM ideas WHERE id = ?1 AND user_id = ?2",
                    IDEA_COLUMNS
                ),
                params![id, user_id],
                idea_from_row,
            )
            .optional()
            .map_err(|e| map_db_err!("get idea", e))
    }

    /// All ideas of a user, oldest first
    pub fn list_user_ideas(&self, user_id: &str) -> Result<Vec<Idea>> {
        let mut stmt = self
            .conn
            .prepare(&format!(
                "SELECT {} FROM ideas WHERE user_id = ?1 ORDER BY created_at, id",
                IDEA_COLUMNS
            ))
            .map_err(|e| map_db_err!("prepare idea list", e))?;

        let ideas = stmt
            .query_map(params![user_id], idea_from_row)
            .map_err(|e| map_db_err!("list ideas", e))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| map_db_err!("read idea row", e))?;
        Ok(ideas)
    }

    /// Ideas of a user restricted to the given statuses, oldest first
    pub fn list_user_ideas_with_status(
        &self,
        user_id: &str,
        statuses: &[IdeaStatus],
    ) -> Result<Vec<Idea>> {
        let sql = format!(
            "SELECT {} FROM ideas WHERE user_id = ?1 AND status IN ({}) ORDER BY created_at, id",
            IDEA_COLUMNS,
            status_placeholders(statuses, 2)
        );
        let mut stmt = self
            .conn
            .prepare(&sql)
            .map_err(|e| map_db_err!("prepare idea list", e))?;

        let values = std::iter::once(user_id.to_string())
            .chain(statuses.iter().map(|s| s.as_str().to_string()));
        let ideas = stmt
            .query_map(params_from_iter(values), idea_from_row)
            .map_err(|e| map_db_err!("list ideas", e))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| map_db_err!("read idea row", e))?;
        Ok(ideas)
    }

    /// Snapshot of other users' ideas with the given statuses, at most `cap`
    /// of them, in id order
    pub fn candidate_pool(
        &self,
        exclude_user_id: &str,
        statuses: &[IdeaStatus],
        cap: usize,
    ) -> Result<Vec<Idea>> {
        let sql = format!(
            "SELECT {} FROM ideas WHERE user_id != ?1 AND status IN ({}) ORDER BY id LIMIT {}",
            IDEA_COLUMNS,
            status_placeholders(statuses, 2),
            cap
        );
        let mut stmt = self
            .conn
            .prepare(&sql)
            .map_err(|e| map_db_err!("prepare candidate pool query", e))?;

        let values = std::iter::once(exclude_user_id.to_string())
            .chain(statuses.iter().map(|s| s.as_str().to_string()));
        let ideas = stmt
            .query_map(params_from_iter(values), idea_from_row)
            .map_err(|e| map_db_err!("load candidate pool", e))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| map_db_err!("read idea row", e))?;
        Ok(ideas)
    }

    /// Every idea in the store, in id order
    pub fn list_all_ideas(&self) -> Result<Vec<Idea>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {} FROM ideas ORDER BY id", IDEA_COLUMNS))
            .map_err(|e| map_db_err!("prepare idea list", e))?;

        let ideas = stmt
            .query_map([], idea_from_row)
            .map_err(|e| map_db_err!("list ideas", e))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| map_db_err!("read idea row", e))?;
        Ok(ideas)
    }

    /// Delete a user's idea together with that user's constellations that
    /// reference it. Returns false when no such idea exists.
    pub fn delete_idea(&mut self, id: &str, user_id: &str) -> Result<bool> {
        let tx = self
            .conn
            .transaction()
            .map_err(|e| map_db_err!("begin delete idea transaction", e))?;

        let deleted = tx
            .execute(
                "DELETE FROM ideas WHERE id = ?1 AND user_id = ?2",
                params![id, user_id],
            )
            .map_err(|e| map_db_err!(&format!("delete idea {}", id), e))?;

        if deleted > 0 {
            let links = tx
                .execute(
                    "DELETE FROM constellations WHERE user_id = ?1 AND (idea_id_1 = ?2 OR idea_id_2 = ?2)",
                    params![user_id, id],
                )
                .map_err(|e| map_db_err!("delete constellations of idea", e))?;
            tracing::debug!(idea_id = id, constellations = links, "deleted idea");
        }

        tx.commit()
            .map_err(|e| map_db_err!("commit delete idea transaction", e))?;
        Ok(deleted > 0)
    }
}
