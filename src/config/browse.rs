// src/config/browse.rs
// Filesystem browsing and static shell configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory browsing configuration.
///
/// `root` confines every browse and media request: paths outside it are
/// refused. The default of `/` keeps the whole readable filesystem
/// reachable; deployments narrow it with `LUMEN_BROWSE_ROOT`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseConfig {
    pub root: PathBuf,
}

impl BrowseConfig {
    pub fn from_env() -> Self {
        Self {
            root: PathBuf::from(super::helpers::env_or("LUMEN_BROWSE_ROOT", "/")),
        }
    }
}

/// Static shell configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticConfig {
    pub dir: PathBuf,
}

impl StaticConfig {
    pub fn from_env() -> Self {
        Self {
            dir: PathBuf::from(super::helpers::env_or("LUMEN_STATIC_DIR", "static")),
        }
    }
}
