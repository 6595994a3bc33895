//! Post store service - create, edit, delete and list posts.
//!
//! Every operation loads the full collection from the repository, works on
//! it in memory and writes the full collection back.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{Post, PostDraft};
use crate::error::DomainError;
use crate::ports::{Clock, PostRepository, SystemClock};

/// Next identifier for a collection: one past the largest id, or 1 when empty.
pub fn next_id(posts: &[Post]) -> Result<u64, DomainError> {
    match posts.iter().map(|p| p.id).max() {
        None => Ok(1),
        Some(max_id) => max_id
            .checked_add(1)
            .ok_or(DomainError::IdsExhausted { max_id }),
    }
}

/// Order posts newest first by `created_at`.
///
/// The sort is stable, so posts with equal timestamps keep their stored order.
pub fn list_for_display(mut posts: Vec<Post>) -> Vec<Post> {
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    posts
}

/// Sole authority over reading, writing and identifying posts.
///
/// Load-mutate-save cycles are serialized within the process. Separate
/// processes sharing one backing store can still overwrite each other.
pub struct PostService {
    repo: Arc<dyn PostRepository>,
    clock: Arc<dyn Clock>,
    write_lock: Mutex<()>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self::with_clock(repo, Arc::new(SystemClock))
    }

    pub fn with_clock(repo: Arc<dyn PostRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repo,
            clock,
            write_lock: Mutex::new(()),
        }
    }

    /// Load the stored collection in storage order.
    pub async fn load(&self) -> Vec<Post> {
        self.repo.load().await
    }

    /// Overwrite the stored collection.
    pub async fn save(&self, posts: &[Post]) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;
        self.repo.save(posts).await?;
        Ok(())
    }

    /// All posts, newest first.
    pub async fn list(&self) -> Vec<Post> {
        list_for_display(self.repo.load().await)
    }

    /// Look up a single post.
    pub async fn find(&self, id: u64) -> Option<Post> {
        self.repo.load().await.into_iter().find(|p| p.id == id)
    }

    /// Validate the fields, assign a fresh id and persist a new post.
    pub async fn create(
        &self,
        title: &str,
        content: &str,
        author: &str,
    ) -> Result<Post, DomainError> {
        let draft = PostDraft::new(title, content, author)?;

        let _guard = self.write_lock.lock().await;
        let mut posts = self.repo.load().await;
        let post = Post::new(next_id(&posts)?, draft, self.clock.now());
        posts.push(post.clone());
        self.repo.save(&posts).await?;

        tracing::info!(post_id = post.id, "Post created");
        Ok(post)
    }

    /// Replace the editable fields of an existing post.
    ///
    /// A missing id is reported before the fields are validated.
    pub async fn update(
        &self,
        id: u64,
        title: &str,
        content: &str,
        author: &str,
    ) -> Result<Post, DomainError> {
        let _guard = self.write_lock.lock().await;
        let mut posts = self.repo.load().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(DomainError::NotFound {
                entity_type: "Post",
                id,
            })?;

        let draft = PostDraft::new(title, content, author)?;
        post.apply(draft, self.clock.now());
        let updated = post.clone();
        self.repo.save(&posts).await?;

        tracing::info!(post_id = id, "Post updated");
        Ok(updated)
    }

    /// Remove a post. Deleting an unknown id succeeds without changes.
    pub async fn delete(&self, id: u64) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;
        let mut posts = self.repo.load().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);
        self.repo.save(&posts).await?;

        if posts.len() < before {
            tracing::info!(post_id = id, "Post deleted");
        } else {
            tracing::debug!(post_id = id, "Delete requested for unknown post");
        }
        Ok(())
    }
}
