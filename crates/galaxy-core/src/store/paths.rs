//! Store layout and discovery

use std::path::{Path, PathBuf};

use crate::error::{GalaxyError, Result};

/// Store directory created under the project root
pub const DEFAULT_STORE_DIR: &str = ".galaxy";

/// Store configuration file
pub const CONFIG_FILE: &str = "config.toml";

/// Active-user session file
pub const SESSION_FILE: &str = "session.toml";

/// Find the nearest store directory at or above `root`
pub fn discover_store(root: &Path) -> Result<PathBuf> {
    for dir in root.ancestors() {
        let candidate = dir.join(DEFAULT_STORE_DIR);
        if candidate.is_dir() {
            tracing::debug!(store = %candidate.display(), "discovered store");
            return Ok(candidate);
        }
    }

    Err(GalaxyError::StoreNotFound {
        search_root: root.to_path_buf(),
    })
}
