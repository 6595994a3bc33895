//! Post collection storage.

mod config;
mod json_file;
mod memory;

pub use config::StorageConfig;
pub use json_file::JsonFilePostRepository;
pub use memory::InMemoryPostRepository;
