use std::path::PathBuf;

/// Default location of the backing file, relative to the working directory.
pub const DEFAULT_POSTS_FILE: &str = "posts.json";

/// Configuration for the post collection storage.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub posts_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            posts_file: PathBuf::from(DEFAULT_POSTS_FILE),
        }
    }
}
