use crate::error::DomainError;

/// Message reported when any required post field is blank.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Title, content and author are required";

/// Validated editable fields of a post.
///
/// Every field is trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl PostDraft {
    /// Trim and validate raw form input.
    ///
    /// Validation is all-or-nothing: a single combined message is reported
    /// no matter which fields are blank.
    pub fn new(title: &str, content: &str, author: &str) -> Result<Self, DomainError> {
        let (title, content, author) = (title.trim(), content.trim(), author.trim());

        if title.is_empty() || content.is_empty() || author.is_empty() {
            return Err(DomainError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
        }

        Ok(Self {
            title: title.to_string(),
            content: content.to_string(),
            author: author.to_string(),
        })
    }
}
