use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GalaxyError;

/// Lifecycle stage of an idea
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdeaStatus {
    #[default]
    Spark,
    Developing,
    Refined,
    Completed,
    Archived,
}

impl IdeaStatus {
    pub const ALL: [IdeaStatus; 5] = [
        IdeaStatus::Spark,
        IdeaStatus::Developing,
        IdeaStatus::Refined,
        IdeaStatus::Completed,
        IdeaStatus::Archived,
    ];

    /// Statuses whose ideas may be matched against other users' ideas
    pub const DISCOVERABLE: [IdeaStatus; 3] = [
        IdeaStatus::Completed,
        IdeaStatus::Refined,
        IdeaStatus::Developing,
    ];

    /// Statuses shown on public profiles and in the cold-start feed
    pub const PUBLIC: [IdeaStatus; 2] = [IdeaStatus::Completed, IdeaStatus::Refined];

    pub fn as_str(&self) -> &'static str {
        match self {
            IdeaStatus::Spark => "spark",
            IdeaStatus::Developing => "developing",
            IdeaStatus::Refined => "refined",
            IdeaStatus::Completed => "completed",
            IdeaStatus::Archived => "archived",
        }
    }

    /// Star brightness used when drawing the idea on the canvas
    pub fn brightness(&self) -> f64 {
        match self {
            IdeaStatus::Spark => 0.3,
            IdeaStatus::Developing => 0.5,
            IdeaStatus::Refined => 0.7,
            IdeaStatus::Completed => 1.0,
            IdeaStatus::Archived => 0.2,
        }
    }

    pub fn is_discoverable(&self) -> bool {
        Self::DISCOVERABLE.contains(self)
    }

    pub fn is_public(&self) -> bool {
        Self::PUBLIC.contains(self)
    }
}

impl FromStr for IdeaStatus {
    type Err = GalaxyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IdeaStatus::ALL
            .iter()
            .find(|status| status.as_str() == s.trim().to_lowercase())
            .copied()
            .ok_or_else(|| {
                GalaxyError::invalid_value(
                    "status",
                    format!(
                        "{} (expected one of: spark, developing, refined, completed, archived)",
                        s
                    ),
                )
            })
    }
}

impl fmt::Display for IdeaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
