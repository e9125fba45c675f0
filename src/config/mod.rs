// src/config/mod.rs
// Central configuration for the Lumen backend

pub mod browse;
pub mod helpers;
pub mod server;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

lazy_static! {
    pub static ref CONFIG: LumenConfig = LumenConfig::from_env();
}

/// Main configuration structure - composes all domain configs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LumenConfig {
    // Domain configs
    pub server: server::ServerConfig,
    pub database: server::DatabaseConfig,
    pub logging: server::LoggingConfig,
    pub browse: browse::BrowseConfig,
    pub static_files: browse::StaticConfig,

    // Flat field aliases
    pub host: String,
    pub port: u16,
    pub database_url: String,
}

impl LumenConfig {
    pub fn from_env() -> Self {
        // Load .env file; don't panic if it doesn't exist
        dotenv::dotenv().ok();

        let server = server::ServerConfig::from_env();
        let database = server::DatabaseConfig::from_env();
        let logging = server::LoggingConfig::from_env();
        let browse = browse::BrowseConfig::from_env();
        let static_files = browse::StaticConfig::from_env();

        Self {
            // Flat field aliases
            host: server.host.clone(),
            port: server.port,
            database_url: database.url.clone(),

            // Domain configs
            server,
            database,
            logging,
            browse,
            static_files,
        }
    }

    pub fn bind_address(&self) -> String {
        self.server.bind_address()
    }
}

impl Default for LumenConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
