use rusqlite::{params, OptionalExtension};

use super::rows::{constellation_from_row, CONSTELLATION_COLUMNS};
use crate::constellation::Constellation;
use crate::error::Result;
use crate::map_db_err;

impl super::Database {
    pub fn insert_constellation(&self, constellation: &Constellation) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO constellations (id, user_id, idea_id_1, idea_id_2, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    constellation.id,
                    constellation.user_id,
                    constellation.idea_id_1,
                    constellation.idea_id_2,
                    constellation.created_at.to_rfc3339(),
                ],
            )
            .map_err(|e| map_db_err!(&format!("insert constellation {}", constellation.id), e))?;
        Ok(())
    }

    /// A user's constellations, oldest first
    pub fn list_constellations(&self, user_id: &str) -> Result<Vec<Constellation>> {
        let mut stmt = self
            .conn
            .prepare(&format!(
                "SELECT {} FROM constellations WHERE user_id = ?1 ORDER BY created_at, id",
                CONSTELLATION_COLUMNS
            ))
            .map_err(|e| map_db_err!("prepare constellation list", e))?;

        let constellations = stmt
            .query_map(params![user_id], constellation_from_row)
            .map_err(|e| map_db_err!("list constellations", e))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| map_db_err!("read constellation row", e))?;
        Ok(constellations)
    }

    /// The user's link between `a` and `b`, stored in either direction
    pub fn find_constellation(
        &self,
        user_id: &str,
        a: &str,
        b: &str,
    ) -> Result<Option<Constellation>> {
        self.conn
            .query_row(
                &format!(
                    "SELECT {} FROM constellations WHERE user_id = ?1 AND ((idea_id_1 = ?2 AND idea_id_2 = ?3) OR (idea_id_1 = ?3 AND idea_id_2 = ?2))",
                    CONSTELLATION_COLUMNS
                ),
                params![user_id, a, b],
                constellation_from_row,
            )
            .optional()
            .map_err(|e| map_db_err!("find constellation", e))
    }

    /// Returns false when the user owns no constellation with this id
    pub fn delete_constellation(&self, id: &str, user_id: &str) -> Result<bool> {
        let deleted = self
            .conn
            .execute(
                "DELETE FROM constellations WHERE id = ?1 AND user_id = ?2",
                params![id, user_id],
            )
            .map_err(|e| map_db_err!(&format!("delete constellation {}", id), e))?;
        Ok(deleted > 0)
    }
}
