use std::collections::HashMap;

use serde::Serialize;

use super::Store;
use crate::constellation::Constellation;
use crate::error::{GalaxyError, Result};
use crate::idea::{Idea, IdeaStatus};
use crate::log_cache_metrics;
use crate::similarity::{RelatedCandidate, ScoredIdea, SimilarityEngine};
use crate::user::{User, UNKNOWN_USER_NAME};

/// Result of a discovery request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscoverReport {
    /// True when the user had no ideas and got the public feed instead
    pub cold_start: bool,
    pub results: Vec<RelatedCandidate>,
}

/// A user's public face: public ideas and constellations
#[derive(Debug, Clone)]
pub struct Profile {
    pub user: User,
    pub ideas: Vec<Idea>,
    pub constellations: Vec<Constellation>,
}

impl Store {
    /// Snapshot of the ideas `user_id` may be shown
    fn candidate_pool(&self, user_id: &str) -> Result<Vec<Idea>> {
        self.db.candidate_pool(
            user_id,
            &IdeaStatus::DISCOVERABLE,
            self.config.discovery.pool_cap,
        )
    }

    /// Public ideas of other users, for the cold-start feed
    fn public_pool(&self, user_id: &str) -> Result<Vec<Idea>> {
        self.db.candidate_pool(
            user_id,
            &IdeaStatus::PUBLIC,
            self.config.discovery.pool_cap,
        )
    }

    fn engine(&self) -> SimilarityEngine<'_> {
        SimilarityEngine::new(self.extractor(), &self.config.discovery)
    }

    /// Attach owner names and shorten descriptions for reporting
    fn to_candidates(&self, scored: &[ScoredIdea<'_>]) -> Result<Vec<RelatedCandidate>> {
        let owner_ids: Vec<&str> = scored.iter().map(|s| s.idea.user_id.as_str()).collect();
        let names: HashMap<String, String> = self.db.user_names(&owner_ids)?;

        Ok(scored
            .iter()
            .map(|s| {
                let name = names
                    .get(&s.idea.user_id)
                    .map(String::as_str)
                    .unwrap_or(UNKNOWN_USER_NAME);
                RelatedCandidate::from_scored(s, name, &self.config.discovery)
            })
            .collect())
    }

    /// Other users' ideas similar to one of the user's own ideas
    pub fn related(&self, user_id: &str, idea_id: &str) -> Result<Vec<RelatedCandidate>> {
        let source = self.get_idea(user_id, idea_id)?;
        let pool = self.candidate_pool(user_id)?;

        let engine = self.engine();
        let scored = engine.related(&source, &pool);
        log_cache_metrics!(engine.metrics(), "related");

        self.to_candidates(&scored)
    }

    /// Other users' ideas matching everything the user has written, or the
    /// cold-start feed when they have written nothing
    pub fn discover_ideas(&self, user_id: &str) -> Result<DiscoverReport> {
        let own_ideas = self.db.list_user_ideas(user_id)?;
        let pool = if own_ideas.is_empty() {
            self.public_pool(user_id)?
        } else {
            self.candidate_pool(user_id)?
        };

        let engine = self.engine();
        let discovery = engine.discover(user_id, &own_ideas, &pool);
        log_cache_metrics!(engine.metrics(), "discover");

        Ok(DiscoverReport {
            cold_start: discovery.is_cold_start(),
            results: self.to_candidates(discovery.results())?,
        })
    }

    /// Public profile of any user
    pub fn profile(&self, user_id: &str) -> Result<Profile> {
        let user = self
            .db
            .get_user(user_id)?
            .ok_or_else(|| GalaxyError::not_found("user", user_id))?;
        let ideas = self
            .db
            .list_user_ideas_with_status(user_id, &IdeaStatus::PUBLIC)?;
        let constellations = self.db.list_constellations(user_id)?;

        Ok(Profile {
            user,
            ideas,
            constellations,
        })
    }
}
