//! Constellations: undirected links between two ideas of the same user

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constellation {
    pub id: String,
    pub user_id: String,
    pub idea_id_1: String,
    pub idea_id_2: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
impl Constellation {
    /// Whether this constellation joins the two ideas, in either direction
    pub(crate) fn links(&self, a: &str, b: &str) -> bool {
        (self.idea_id_1 == a && self.idea_id_2 == b)
            || (self.idea_id_1 == b && self.idea_id_2 == a)
    }
}
