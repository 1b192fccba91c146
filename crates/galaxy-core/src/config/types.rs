//! Configuration type definitions

use crate::idea::IdeaStatus;
use serde::{Deserialize, Serialize};

/// Current store format version
pub const STORE_FORMAT_VERSION: u32 = 1;

/// Store configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Status given to new ideas when none is specified
    #[serde(default)]
    pub default_status: IdeaStatus,

    /// Related-idea and discovery ranking parameters
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    /// Keyword extraction settings
    #[serde(default)]
    pub keywords: KeywordsConfig,
}

/// Ranking parameters for related ideas and discovery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Minimum score (exclusive) for a related idea
    #[serde(default = "default_related_threshold")]
    pub related_threshold: f64,

    /// Maximum related ideas returned
    #[serde(default = "default_related_limit")]
    pub related_limit: usize,

    /// Minimum score (exclusive) for a discovery result
    #[serde(default = "default_discover_threshold")]
    pub discover_threshold: f64,

    /// Maximum discovery results returned
    #[serde(default = "default_discover_limit")]
    pub discover_limit: usize,

    /// Maximum ideas in the feed shown to users without ideas of their own
    #[serde(default = "default_cold_start_limit")]
    pub cold_start_limit: usize,

    /// Placeholder score attached to cold-start results
    #[serde(default = "default_cold_start_score")]
    pub cold_start_score: f64,

    /// Maximum candidate ideas loaded from the store per request
    #[serde(default = "default_pool_cap")]
    pub pool_cap: usize,

    /// Characters of description kept in related/discovery results
    #[serde(default = "default_description_preview_chars")]
    pub description_preview_chars: usize,

    /// Decimal places reported scores are rounded to
    #[serde(default = "default_score_precision")]
    pub score_precision: u32,
}

/// Keyword extraction settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordsConfig {
    /// Words excluded in addition to the built-in stopword list
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
}

fn default_version() -> u32 {
    STORE_FORMAT_VERSION
}

fn default_related_threshold() -> f64 {
    0.10
}

fn default_related_limit() -> usize {
    10
}

fn default_discover_threshold() -> f64 {
    0.05
}

fn default_discover_limit() -> usize {
    20
}

fn default_cold_start_limit() -> usize {
    10
}

fn default_cold_start_score() -> f64 {
    0.5
}

fn default_pool_cap() -> usize {
    500
}

fn default_description_preview_chars() -> usize {
    200
}

fn default_score_precision() -> u32 {
    2
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            version: STORE_FORMAT_VERSION,
            default_status: IdeaStatus::default(),
            discovery: DiscoveryConfig::default(),
            keywords: KeywordsConfig::default(),
        }
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            related_threshold: default_related_threshold(),
            related_limit: default_related_limit(),
            discover_threshold: default_discover_threshold(),
            discover_limit: default_discover_limit(),
            cold_start_limit: default_cold_start_limit(),
            cold_start_score: default_cold_start_score(),
            pool_cap: default_pool_cap(),
            description_preview_chars: default_description_preview_chars(),
            score_precision: default_score_precision(),
        }
    }
}
