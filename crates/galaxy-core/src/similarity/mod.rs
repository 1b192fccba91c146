//! Similarity engine for related ideas and discovery
//!
//! Ideas are compared by the Jaccard index of their keyword sets. The engine
//! is pure: it reads a snapshot of ideas handed to it by the store and never
//! writes anything back.

mod calculation;

mod discovery;

mod ranking;

pub use calculation::{round_score, similarity};
pub use discovery::{cold_start, discover};
pub use ranking::rank_related;

use std::borrow::Cow;
use std::time::Instant;

use serde::Serialize;

use crate::config::DiscoveryConfig;
use crate::idea::{Idea, IdeaStatus};
use crate::logging::CacheMetrics;
use crate::text::{KeywordExtractor, KeywordSet};
use crate::trace_time;

/// An idea paired with its resolved keyword set
#[derive(Debug, Clone)]
pub struct CandidateIdea<'a> {
    pub idea: &'a Idea,
    pub keywords: Cow<'a, KeywordSet>,
}

/// An idea with its similarity score (full precision)
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredIdea<'a> {
    pub idea: &'a Idea,
    pub score: f64,
}

/// Outcome of a discovery request
#[derive(Debug, Clone, PartialEq)]
pub enum Discovery<'a> {
    /// Ideas ranked against the user's aggregate keywords
    Similar(Vec<ScoredIdea<'a>>),
    /// The user has no ideas; public ideas with a placeholder score
    ColdStart(Vec<ScoredIdea<'a>>),
}

impl<'a> Discovery<'a> {
    pub fn results(&self) -> &[ScoredIdea<'a>] {
        match self {
            Discovery::Similar(results) | Discovery::ColdStart(results) => results,
        }
    }

    pub fn is_cold_start(&self) -> bool {
        matches!(self, Discovery::ColdStart(_))
    }
}

/// A related idea as reported to callers: owner name resolved, description
/// shortened, score rounded
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatedCandidate {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: IdeaStatus,
    pub brightness: f64,
    pub user_id: String,
    pub user_name: String,
    pub similarity: f64,
}

impl RelatedCandidate {
    pub fn from_scored(
        scored: &ScoredIdea<'_>,
        user_name: impl Into<String>,
        policy: &DiscoveryConfig,
    ) -> Self {
        let idea = scored.idea;
        RelatedCandidate {
            id: idea.id.clone(),
            title: idea.title.clone(),
            description: idea.description_preview(policy.description_preview_chars),
            status: idea.status,
            brightness: idea.brightness(),
            user_id: idea.user_id.clone(),
            user_name: user_name.into(),
            similarity: round_score(scored.score, policy.score_precision),
        }
    }
}

/// Similarity Engine
pub struct SimilarityEngine<'a> {
    extractor: KeywordExtractor<'a>,
    policy: &'a DiscoveryConfig,
    metrics: CacheMetrics,
}

impl<'a> SimilarityEngine<'a> {
    /// Create a new Similarity Engine
    pub fn new(extractor: KeywordExtractor<'a>, policy: &'a DiscoveryConfig) -> Self {
        SimilarityEngine {
            extractor,
            policy,
            metrics: CacheMetrics::new(),
        }
    }

    pub fn metrics(&self) -> &CacheMetrics {
        &self.metrics
    }

    /// Keywords of an idea: the cache when present, otherwise derived from
    /// title + description
    pub fn keywords_for<'i>(&self, idea: &'i Idea) -> Cow<'i, KeywordSet> {
        match idea.keywords.get() {
            Some(keywords) => {
                self.metrics.record_cache_hit();
                Cow::Borrowed(keywords)
            }
            None => {
                self.metrics.record_cache_miss();
                Cow::Owned(self.extractor.extract_idea(&idea.title, &idea.description))
            }
        }
    }

    /// Union of the keyword sets of `ideas`
    pub fn aggregate_keywords(&self, ideas: &[Idea]) -> KeywordSet {
        let mut aggregate = KeywordSet::new();
        for idea in ideas {
            aggregate.merge(&self.keywords_for(idea));
        }
        aggregate
    }

    /// Discoverable ideas of users other than `user_id`, with keywords resolved
    pub fn candidates<'p>(&self, pool: &'p [Idea], user_id: &str) -> Vec<CandidateIdea<'p>> {
        pool.iter()
            .filter(|idea| idea.user_id != user_id && idea.status.is_discoverable())
            .map(|idea| CandidateIdea {
                idea,
                keywords: self.keywords_for(idea),
            })
            .collect()
    }

    /// Ideas of other users most similar to `source`
    pub fn related<'p>(&self, source: &Idea, pool: &'p [Idea]) -> Vec<ScoredIdea<'p>> {
        let start = Instant::now();
        let source_keywords = self.keywords_for(source);
        let candidates = self.candidates(pool, &source.user_id);
        let results = rank_related(
            &source_keywords,
            &candidates,
            self.policy.related_threshold,
            self.policy.related_limit,
        );
        trace_time!(
            start,
            "rank_related",
            candidates = candidates.len(),
            results = results.len()
        );
        results
    }

    /// Ideas of other users matching everything `user_id` has written.
    ///
    /// A user without ideas gets the cold-start feed instead.
    pub fn discover<'p>(
        &self,
        user_id: &str,
        own_ideas: &[Idea],
        pool: &'p [Idea],
    ) -> Discovery<'p> {
        if own_ideas.is_empty() {
            return Discovery::ColdStart(cold_start(
                pool,
                self.policy.cold_start_limit,
                self.policy.cold_start_score,
            ));
        }

        let start = Instant::now();
        let query = self.aggregate_keywords(own_ideas);
        let candidates = self.candidates(pool, user_id);
        let results = discover(
            &query,
            &candidates,
            self.policy.discover_threshold,
            self.policy.discover_limit,
        );
        trace_time!(
            start,
            "discover",
            query_keywords = query.len(),
            candidates = candidates.len(),
            results = results.len()
        );
        Discovery::Similar(results)
    }
}
