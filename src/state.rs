// src/state.rs
// Application state shared across handlers

use std::path::PathBuf;
use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::CONFIG;
use crate::session::SessionStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub sqlite_pool: SqlitePool,
    pub sessions: Arc<SessionStore>,
    pub browse_root: PathBuf,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(pool: SqlitePool, browse_root: PathBuf, static_dir: PathBuf) -> Self {
        Self {
            sqlite_pool: pool,
            sessions: Arc::new(SessionStore::new()),
            browse_root,
            static_dir,
        }
    }

    pub fn from_config(pool: SqlitePool) -> Self {
        Self::new(
            pool,
            CONFIG.browse.root.clone(),
            CONFIG.static_files.dir.clone(),
        )
    }
}
