//! # Postboard Core
//!
//! The domain layer of Postboard.
//! This crate holds the post model, validation and the post store service,
//! with storage reached only through the ports it defines.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::DomainError;
pub use service::{PostService, list_for_display, next_id};
