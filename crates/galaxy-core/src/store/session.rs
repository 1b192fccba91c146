//! Active-user session (stored in `.galaxy/session.toml`)

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GalaxyError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Id of the user commands act on behalf of
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_user: Option<String>,
}

impl Session {
    /// Load the session; a missing file is an empty session
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| GalaxyError::FailedOperation {
                operation: "serialize session.toml".to_string(),
                reason: e.to_string(),
            })?;
        fs::write(path, content)?;
        Ok(())
    }
}
