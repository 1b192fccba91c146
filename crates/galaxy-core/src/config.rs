//! Store configuration for galaxy
//!
//! Configuration is stored in `.galaxy/config.toml`; every key is optional.

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::{GalaxyError, Result};
use crate::text::StopwordSet;

pub use types::{DiscoveryConfig, KeywordsConfig, StoreConfig, STORE_FORMAT_VERSION};

impl StoreConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: StoreConfig = toml::from_str(&content)?;

        if config.version > STORE_FORMAT_VERSION {
            return Err(GalaxyError::InvalidStore {
                reason: format!(
                    "store format version {} is newer than supported version {}",
                    config.version, STORE_FORMAT_VERSION
                ),
            });
        }

        config.discovery.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GalaxyError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Stopword set injected into keyword extraction for this store
    pub fn stopwords(&self) -> StopwordSet {
        StopwordSet::english().with_extra(&self.keywords.extra_stopwords)
    }
}

/// Digits beyond this exceed what an f64 score can carry
pub const MAX_SCORE_PRECISION: u32 = 15;

impl DiscoveryConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("discovery.related_threshold", self.related_threshold),
            ("discovery.discover_threshold", self.discover_threshold),
            ("discovery.cold_start_score", self.cold_start_score),
        ] {
            if !(0.0..=1.0).contains(&value) {
                bail_invalid!(name, value);
            }
        }

        for (name, value) in [
            ("discovery.related_limit", self.related_limit),
            ("discovery.discover_limit", self.discover_limit),
            ("discovery.cold_start_limit", self.cold_start_limit),
            ("discovery.pool_cap", self.pool_cap),
            (
                "discovery.description_preview_chars",
                self.description_preview_chars,
            ),
        ] {
            if value == 0 {
                bail_invalid!(name, value);
            }
        }

        if self.score_precision > MAX_SCORE_PRECISION {
            bail_invalid!("discovery.score_precision", self.score_precision);
        }

        Ok(())
    }
}
