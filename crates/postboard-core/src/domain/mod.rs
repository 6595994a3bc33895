//! Domain entities - the core business objects.

mod draft;
mod post;
pub mod timestamp;

pub use draft::{PostDraft, REQUIRED_FIELDS_MESSAGE};
pub use post::Post;
