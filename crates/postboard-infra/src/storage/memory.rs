//! In-memory post repository - ephemeral storage for tests and embedders.

use async_trait::async_trait;
use tokio::sync::RwLock;

use postboard_core::domain::Post;
use postboard_core::error::RepoError;
use postboard_core::ports::PostRepository;

/// In-memory post collection guarded by an async RwLock.
///
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing collection.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn load(&self) -> Vec<Post> {
        self.posts.read().await.clone()
    }

    async fn save(&self, posts: &[Post]) -> Result<(), RepoError> {
        let mut store = self.posts.write().await;
        *store = posts.to_vec();
        Ok(())
    }
}
