//! # Postboard Shared
//!
//! Types exchanged between the browser-facing handlers and their callers:
//! form payloads, flash notices and the health response.

pub mod dto;
pub mod notice;

pub use dto::{HealthResponse, PostForm};
pub use notice::{Level, Notice};
