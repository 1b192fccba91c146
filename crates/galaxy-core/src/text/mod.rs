//! Keyword extraction for the similarity engine
//!
//! Text is reduced to a [`KeywordSet`]: every run of three or more ASCII
//! letters, lower-cased, minus a [`StopwordSet`]. There is no stemming.

mod stopwords;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::sync::OnceLock;

static KEYWORD_PATTERN: OnceLock<Regex> = OnceLock::new();

static ENGLISH_STOPWORDS: OnceLock<StopwordSet> = OnceLock::new();

fn keyword_pattern() -> &'static Regex {
    KEYWORD_PATTERN
        .get_or_init(|| Regex::new(r"[a-zA-Z]{3,}").expect("Invalid keyword regex pattern"))
}

/// Words excluded from keyword extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Build a stopword set; words are lower-cased
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        StopwordSet {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// The built-in English + domain-noise list, built once per process
    pub fn english() -> &'static StopwordSet {
        ENGLISH_STOPWORDS.get_or_init(|| StopwordSet::from_words(stopwords::ENGLISH))
    }

    /// A copy of this set with additional words
    pub fn with_extra<I, S>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = self.words.clone();
        words.extend(StopwordSet::from_words(extra).words);
        StopwordSet { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Normalized set of keywords derived from text.
///
/// Backed by a `BTreeSet` so serialized output is stable; callers must not
/// rely on the order for anything but display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordSet(BTreeSet<String>);

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.0.contains(keyword)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of keywords present in both sets
    pub fn intersection_len(&self, other: &KeywordSet) -> usize {
        // Probe the smaller set against the larger one
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.0.iter().filter(|k| large.0.contains(*k)).count()
    }

    /// Add every keyword of `other` to this set
    pub fn merge(&mut self, other: &KeywordSet) {
        self.0.extend(other.0.iter().cloned());
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        KeywordSet(iter.into_iter().map(Into::into).collect())
    }
}

/// Extracts keyword sets using an injected stopword set
#[derive(Debug, Clone, Copy)]
pub struct KeywordExtractor<'a> {
    stopwords: &'a StopwordSet,
}

impl<'a> KeywordExtractor<'a> {
    pub fn new(stopwords: &'a StopwordSet) -> Self {
        KeywordExtractor { stopwords }
    }

    pub fn stopwords(&self) -> &'a StopwordSet {
        self.stopwords
    }

    /// Extract the keyword set of arbitrary text
    pub fn extract(&self, text: &str) -> KeywordSet {
        keyword_pattern()
            .find_iter(text)
            .map(|m| m.as_str().to_ascii_lowercase())
            .filter(|token| !self.stopwords.contains(token))
            .collect()
    }

    /// Extract keywords from an idea's title and description together
    pub fn extract_idea(&self, title: &str, description: &str) -> KeywordSet {
        self.extract(&format!("{} {}", title, description))
    }
}

impl Default for KeywordExtractor<'static> {
    fn default() -> Self {
        KeywordExtractor::new(StopwordSet::english())
    }
}

/// Extract keywords with the built-in English stopword set
pub fn extract_keywords(text: &str) -> KeywordSet {
    KeywordExtractor::default().extract(text)
}
