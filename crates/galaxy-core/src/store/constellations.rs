use chrono::Utc;

use super::Store;
use crate::constellation::Constellation;
use crate::error::{GalaxyError, Result};
use crate::id;

impl Store {
    /// Link two of the user's ideas
    pub fn create_constellation(
        &self,
        user_id: &str,
        idea_a: &str,
        idea_b: &str,
    ) -> Result<Constellation> {
        if idea_a == idea_b {
            return Err(GalaxyError::invalid_value(
                "constellation",
                "an idea cannot be linked to itself",
            ));
        }

        let owns_both = self.db.get_user_idea(idea_a, user_id)?.is_some()
            && self.db.get_user_idea(idea_b, user_id)?.is_some();
        if !owns_both {
            return Err(GalaxyError::not_found(
                "one or both ideas",
                format!("{}, {}", idea_a, idea_b),
            ));
        }

        if let Some(existing) = self.db.find_constellation(user_id, idea_a, idea_b)? {
            return Err(GalaxyError::already_exists("constellation", existing.id));
        }

        let constellation = Constellation {
            id: id::generate(id::CONSTELLATION_PREFIX),
            user_id: user_id.to_string(),
            idea_id_1: idea_a.to_string(),
            idea_id_2: idea_b.to_string(),
            created_at: Utc::now(),
        };
        self.db.insert_constellation(&constellation)?;
        Ok(constellation)
    }

    pub fn list_constellations(&self, user_id: &str) -> Result<Vec<Constellation>> {
        self.db.list_constellations(user_id)
    }

    pub fn delete_constellation(&self, user_id: &str, constellation_id: &str) -> Result<()> {
        if !self.db.delete_constellation(constellation_id, user_id)? {
            return Err(GalaxyError::not_found("constellation", constellation_id));
        }
        Ok(())
    }
}
