//! Application state - shared across all handlers.

use std::sync::Arc;

use postboard_core::PostService;
use postboard_core::error::RepoError;
use postboard_core::ports::PostRepository;
use postboard_infra::{JsonFilePostRepository, StorageConfig};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostService>,
}

impl AppState {
    /// Build the state on top of the configured posts file.
    ///
    /// The posts file is the only store; failing to set it up is fatal.
    pub async fn new(config: &StorageConfig) -> Result<Self, RepoError> {
        let repo = JsonFilePostRepository::init(config).await.map_err(|e| {
            tracing::error!(
                "Failed to initialize posts file {}: {}",
                config.posts_file.display(),
                e
            );
            e
        })?;

        tracing::info!("Application state initialized");
        Ok(Self::with_repository(Arc::new(repo)))
    }

    pub fn with_repository(repo: Arc<dyn PostRepository>) -> Self {
        Self {
            posts: Arc::new(PostService::new(repo)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[actix_rt::test]
    async fn test_new_creates_posts_file() {
        let dir = TempDir::new().unwrap();
        let config = StorageConfig {
            posts_file: dir.path().join("posts.json"),
        };

        let state = AppState::new(&config).await.unwrap();
        state.posts.create("Title", "Body", "alice").await.unwrap();

        let raw = std::fs::read_to_string(&config.posts_file).unwrap();
        assert!(raw.contains("\"title\": \"Title\""));
    }

    #[actix_rt::test]
    async fn test_new_fails_when_posts_file_cannot_be_created() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "plain file").unwrap();
        let config = StorageConfig {
            posts_file: blocker.join("posts.json"),
        };

        let result = AppState::new(&config).await;

        assert!(result.is_err());
        assert!(!config.posts_file.exists());
    }
}
