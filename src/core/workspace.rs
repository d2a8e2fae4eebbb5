use crate::config::Config;
use crate::db::initialize::open_db;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::store::{CachedStore, SqliteStore};
use crate::ui::messages::warning;
use std::time::Duration;

/// Everything a command needs: configuration and the cached store.
pub struct Workspace {
    pub cfg: Config,
    pub store: CachedStore<SqliteStore>,
}

impl Workspace {
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let pool = open_db(&cfg.database)?;
        let store = CachedStore::new(
            SqliteStore::new(pool),
            Duration::from_secs(cfg.cache_ttl_secs),
        );
        Ok(Self {
            cfg: cfg.clone(),
            store,
        })
    }

    /// Record an operation in the internal log. Failures only warn.
    pub fn audit(&self, operation: &str, target: &str, message: &str) {
        let conn = &self.store.inner().pool().conn;
        if let Err(e) = ttlog(conn, operation, target, message) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }
}
