use async_trait::async_trait;

use crate::domain::Post;
use crate::error::RepoError;

/// Post repository - whole-collection persistence for posts.
///
/// Implementations read and write the entire collection at once; there is
/// no per-record access.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Load every stored post.
    ///
    /// A missing or unreadable backing store yields an empty collection
    /// rather than an error.
    async fn load(&self) -> Vec<Post>;

    /// Overwrite the stored collection with `posts`.
    async fn save(&self, posts: &[Post]) -> Result<(), RepoError>;
}
