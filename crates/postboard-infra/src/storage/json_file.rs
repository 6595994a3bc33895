//! JSON file repository - the post collection as a single pretty-printed array.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use postboard_core::domain::Post;
use postboard_core::error::RepoError;
use postboard_core::ports::PostRepository;

use super::StorageConfig;

/// Post repository backed by one JSON file.
///
/// Every save rewrites the whole file. There is no locking on the file
/// itself; the last full write wins.
#[derive(Debug, Clone)]
pub struct JsonFilePostRepository {
    path: PathBuf,
}

impl JsonFilePostRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open the configured backing file, creating it as an empty array if missing.
    pub async fn init(config: &StorageConfig) -> Result<Self, RepoError> {
        let repo = Self::new(&config.posts_file);

        match tokio::fs::try_exists(&repo.path).await {
            Ok(true) => {
                tracing::info!(path = %repo.path.display(), "Using existing posts file");
            }
            Ok(false) => {
                if let Some(parent) = repo.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent)
                        .await
                        .map_err(|e| RepoError::Write(e.to_string()))?;
                }
                repo.save(&[]).await?;
                tracing::info!(path = %repo.path.display(), "Initialized empty posts file");
            }
            Err(e) => return Err(RepoError::Read(e.to_string())),
        }

        Ok(repo)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_posts(&self) -> Result<Vec<Post>, RepoError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                RepoError::Read("posts file does not exist".to_string())
            } else {
                RepoError::Read(e.to_string())
            }
        })?;

        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl PostRepository for JsonFilePostRepository {
    async fn load(&self) -> Vec<Post> {
        match self.read_posts().await {
            Ok(posts) => {
                tracing::debug!(count = posts.len(), "Loaded posts");
                posts
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Treating unreadable posts file as empty"
                );
                Vec::new()
            }
        }
    }

    async fn save(&self, posts: &[Post]) -> Result<(), RepoError> {
        let bytes = serde_json::to_vec_pretty(posts)?;

        tokio::fs::write(&self.path, bytes).await.map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "Failed to write posts file");
            RepoError::Write(e.to_string())
        })?;

        tracing::debug!(count = posts.len(), "Saved posts");
        Ok(())
    }
}
