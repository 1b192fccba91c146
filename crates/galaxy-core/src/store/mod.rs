//! Store management for galaxy
//!
//! The store is the directory holding all galaxy data: configuration, the
//! SQLite database and the active-user session.
//! Default location: `.galaxy/` under the project root.

mod constellations;
mod discovery;
mod ideas;
pub mod paths;
pub mod session;
mod users;

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::StoreConfig;
use crate::db::Database;
use crate::error::{GalaxyError, Result};
use crate::text::{KeywordExtractor, StopwordSet};
use crate::user::User;

pub use discovery::{DiscoverReport, Profile};
pub use paths::{CONFIG_FILE, DEFAULT_STORE_DIR, SESSION_FILE};
pub use session::Session;

/// The galaxy store
#[derive(Debug)]
pub struct Store {
    /// Root path of the store
    root: PathBuf,
    /// Store configuration
    config: StoreConfig,
    /// Stopwords injected into keyword extraction (built-in + configured)
    stopwords: StopwordSet,
    /// SQLite database
    db: Database,
}

impl Store {
    /// Discover a store by walking up from the given root directory
    pub fn discover(root: &Path) -> Result<Self> {
        let store_path = paths::discover_store(root)?;
        Self::open(&store_path)
    }

    /// Open an existing store at the given path
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_dir() {
            return Err(GalaxyError::StoreNotFound {
                search_root: path.to_path_buf(),
            });
        }

        let config_path = path.join(CONFIG_FILE);
        let config = if config_path.exists() {
            StoreConfig::load(&config_path)?
        } else {
            StoreConfig::default()
        };

        let db = Database::open(path)?;
        Ok(Self::from_parts(path.to_path_buf(), config, db))
    }

    /// Initialize a new store under the given project root
    pub fn init(project_root: &Path) -> Result<Self> {
        Self::init_at(&project_root.join(DEFAULT_STORE_DIR))
    }

    /// Initialize a store at an explicit store root path.
    ///
    /// Idempotent: an existing config is kept as is.
    pub fn init_at(store_root: &Path) -> Result<Self> {
        fs::create_dir_all(store_root)?;

        let config_path = store_root.join(CONFIG_FILE);
        let config = if config_path.exists() {
            StoreConfig::load(&config_path)?
        } else {
            let config = StoreConfig::default();
            config.save(&config_path)?;
            config
        };

        let db = Database::open(store_root)?;
        tracing::info!(store = %store_root.display(), "initialized store");
        Ok(Self::from_parts(store_root.to_path_buf(), config, db))
    }

    fn from_parts(root: PathBuf, config: StoreConfig, db: Database) -> Self {
        let stopwords = config.stopwords();
        Store {
            root,
            config,
            stopwords,
            db,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn db(&self) -> &Database {
        &self.db
    }

    /// Keyword extractor using this store's stopword set
    pub fn extractor(&self) -> KeywordExtractor<'_> {
        KeywordExtractor::new(&self.stopwords)
    }

    fn session_path(&self) -> PathBuf {
        self.root.join(SESSION_FILE)
    }

    pub fn session(&self) -> Result<Session> {
        Session::load(&self.session_path())
    }

    /// Make `user_id` the user subsequent commands act for
    pub fn set_active_user(&self, user_id: &str) -> Result<()> {
        let session = Session {
            active_user: Some(user_id.to_string()),
        };
        session.save(&self.session_path())
    }

    /// The user recorded in the session.
    ///
    /// Fails with [`GalaxyError::NoActiveUser`] when nobody is logged in or
    /// the recorded user no longer exists.
    pub fn active_user(&self) -> Result<User> {
        let session = self.session()?;
        let Some(user_id) = session.active_user else {
            return Err(GalaxyError::NoActiveUser);
        };
        self.db.get_user(&user_id)?.ok_or(GalaxyError::NoActiveUser)
    }
}
