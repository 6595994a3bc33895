//! # Postboard Infrastructure
//!
//! Concrete implementations of the ports defined in `postboard-core`.
//!
//! - [`JsonFilePostRepository`] - the post collection as a JSON array on disk
//! - [`InMemoryPostRepository`] - ephemeral collection for tests and embedding

pub mod storage;

pub use storage::{InMemoryPostRepository, JsonFilePostRepository, StorageConfig};
