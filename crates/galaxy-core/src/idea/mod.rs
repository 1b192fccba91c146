//! Ideas: the stars of a user's galaxy

mod status;

pub use status::IdeaStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::Result;
use crate::text::{KeywordExtractor, KeywordSet};

/// Position of an idea on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Result<Self> {
        if !x.is_finite() || !y.is_finite() {
            bail_invalid!("position", format!("{},{}", x, y));
        }
        Ok(Position { x, y })
    }
}

impl Default for Position {
    fn default() -> Self {
        Position { x: 0.5, y: 0.5 }
    }
}

/// Stored keyword cache of an idea.
///
/// A cache is either present and trusted, or missing and derived lazily from
/// title + description. An empty stored list counts as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum KeywordCache {
    Cached(KeywordSet),
    #[default]
    Missing,
}

impl KeywordCache {
    /// Interpret a keyword list read from storage
    pub fn from_stored(stored: Option<KeywordSet>) -> Self {
        match stored {
            Some(keywords) if !keywords.is_empty() => KeywordCache::Cached(keywords),
            _ => KeywordCache::Missing,
        }
    }

    pub fn get(&self) -> Option<&KeywordSet> {
        match self {
            KeywordCache::Cached(keywords) => Some(keywords),
            KeywordCache::Missing => None,
        }
    }

    pub fn is_cached(&self) -> bool {
        matches!(self, KeywordCache::Cached(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Idea {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub status: IdeaStatus,
    pub position: Position,
    pub keywords: KeywordCache,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Idea {
    pub fn brightness(&self) -> f64 {
        self.status.brightness()
    }

    /// Recompute the keyword cache from the current title and description
    pub fn refresh_keywords(&mut self, extractor: &KeywordExtractor<'_>) {
        let keywords = extractor.extract_idea(&self.title, &self.description);
        self.keywords = KeywordCache::from_stored(Some(keywords));
    }

    /// Description cut to at most `max_chars` characters
    pub fn description_preview(&self, max_chars: usize) -> String {
        truncate_chars(&self.description, max_chars)
    }
}

/// Fields for a new idea
#[derive(Debug, Clone, Default)]
pub struct NewIdea {
    pub title: String,
    pub description: String,
    pub status: IdeaStatus,
    pub position: Option<Position>,
}

impl NewIdea {
    pub fn new(title: impl Into<String>) -> Self {
        NewIdea {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_status(mut self, status: IdeaStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_title(&self.title)
    }
}

/// Partial update of an idea; `None` leaves a field untouched
#[derive(Debug, Clone, Default)]
pub struct IdeaPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<IdeaStatus>,
    pub position: Option<Position>,
}

impl IdeaPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.position.is_none()
    }

    /// Whether applying this patch changes the text keywords derive from
    pub fn touches_text(&self) -> bool {
        self.title.is_some() || self.description.is_some()
    }

    /// Apply the patch, bumping `updated_at` and refreshing keywords when the
    /// text changed
    pub fn apply(
        &self,
        idea: &mut Idea,
        now: DateTime<Utc>,
        extractor: &KeywordExtractor<'_>,
    ) -> Result<()> {
        if let Some(title) = &self.title {
            validate_title(title)?;
            idea.title = title.clone();
        }
        if let Some(description) = &self.description {
            idea.description = description.clone();
        }
        if let Some(status) = self.status {
            idea.status = status;
        }
        if let Some(position) = self.position {
            idea.position = position;
        }
        if self.touches_text() || !idea.keywords.is_cached() {
            idea.refresh_keywords(extractor);
        }
        idea.updated_at = now;
        Ok(())
    }
}

fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        bail_invalid!("title", "(empty)");
    }
    Ok(())
}

/// Truncate to at most `max_chars` characters, never splitting a character
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
