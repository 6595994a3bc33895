//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use postboard_infra::StorageConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let storage = env::var("POSTS_FILE")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(|p| StorageConfig {
                posts_file: PathBuf::from(p),
            })
            .unwrap_or_default();

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            storage,
        }
    }
}
