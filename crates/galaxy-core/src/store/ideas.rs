use chrono::Utc;

use super::Store;
use crate::error::{GalaxyError, Result};
use crate::id;
use crate::idea::{Idea, IdeaPatch, KeywordCache, NewIdea};
use crate::text::KeywordSet;

impl Store {
    /// Create an idea owned by `user_id`, caching its keywords
    pub fn create_idea(&self, user_id: &str, new: NewIdea) -> Result<Idea> {
        new.validate()?;

        let now = Utc::now();
        let mut idea = Idea {
            id: id::generate(id::IDEA_PREFIX),
            user_id: user_id.to_string(),
            title: new.title,
            description: new.description,
            status: new.status,
            position: new.position.unwrap_or_default(),
            keywords: KeywordCache::Missing,
            created_at: now,
            updated_at: now,
        };
        idea.refresh_keywords(&self.extractor());
        self.db.insert_idea(&idea)?;

        tracing::debug!(idea_id = %idea.id, status = %idea.status, "created idea");
        Ok(idea)
    }

    /// Ideas owned by `user_id`, oldest first
    pub fn list_ideas(&self, user_id: &str) -> Result<Vec<Idea>> {
        self.db.list_user_ideas(user_id)
    }

    /// One of the user's own ideas
    pub fn get_idea(&self, user_id: &str, idea_id: &str) -> Result<Idea> {
        self.db
            .get_user_idea(idea_id, user_id)?
            .ok_or_else(|| GalaxyError::not_found("idea", idea_id))
    }

    /// Apply a partial update to one of the user's ideas
    pub fn update_idea(&self, user_id: &str, idea_id: &str, patch: &IdeaPatch) -> Result<Idea> {
        let mut idea = self.get_idea(user_id, idea_id)?;
        patch.apply(&mut idea, Utc::now(), &self.extractor())?;
        self.db.update_idea(&idea)?;

        tracing::debug!(idea_id, text_changed = patch.touches_text(), "updated idea");
        Ok(idea)
    }

    /// Delete one of the user's ideas along with their constellations that
    /// reference it
    pub fn delete_idea(&mut self, user_id: &str, idea_id: &str) -> Result<()> {
        if !self.db.delete_idea(idea_id, user_id)? {
            return Err(GalaxyError::not_found("idea", idea_id));
        }
        Ok(())
    }

    /// Recompute the keyword cache of every idea in the store.
    ///
    /// Needed after the configured stopwords change. Returns the number of
    /// ideas whose cache changed.
    pub fn reindex(&self) -> Result<usize> {
        let extractor = self.extractor();
        let mut changed = 0;
        for mut idea in self.db.list_all_ideas()? {
            let before = idea.keywords.clone();
            idea.refresh_keywords(&extractor);
            if idea.keywords != before {
                self.db.update_keywords(&idea.id, &idea.keywords)?;
                changed += 1;
            }
        }
        tracing::info!(changed, "reindexed keyword caches");
        Ok(changed)
    }

    /// Keywords of arbitrary text under this store's stopwords
    pub fn keywords(&self, text: &str) -> KeywordSet {
        self.extractor().extract(text)
    }
}
