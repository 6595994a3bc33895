use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::draft::PostDraft;
use super::timestamp;

/// Post entity - a short blog post stored in the post collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post from a validated draft.
    pub fn new(id: u64, draft: PostDraft, now: DateTime<Utc>) -> Self {
        let PostDraft {
            title,
            content,
            author,
        } = draft;
        Self {
            id,
            title,
            content,
            author,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the editable fields and refresh `updated_at`.
    ///
    /// `updated_at` never moves before `created_at`, even if the clock steps back.
    pub fn apply(&mut self, draft: PostDraft, now: DateTime<Utc>) {
        self.title = draft.title;
        self.content = draft.content;
        self.author = draft.author;
        self.updated_at = now.max(self.created_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn draft(title: &str) -> PostDraft {
        PostDraft::new(title, "body", "alice").unwrap()
    }

    #[test]
    fn test_new_post_has_equal_timestamps() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let post = Post::new(7, draft("Hello"), now);

        assert_eq!(post.id, 7);
        assert_eq!(post.title, "Hello");
        assert_eq!(post.created_at, post.updated_at);
    }

    #[test]
    fn test_apply_keeps_created_at() {
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let mut post = Post::new(1, draft("Old"), created);

        post.apply(draft("New"), created + Duration::minutes(5));

        assert_eq!(post.title, "New");
        assert_eq!(post.created_at, created);
        assert_eq!(post.updated_at, created + Duration::minutes(5));
    }

    #[test]
    fn test_apply_clamps_clock_skew() {
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let mut post = Post::new(1, draft("Old"), created);

        post.apply(draft("New"), created - Duration::hours(1));

        assert_eq!(post.updated_at, created);
    }

    #[test]
    fn test_serialized_shape() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let post = Post::new(1, draft("Hello"), now);

        let value = serde_json::to_value(&post).unwrap();

        assert_eq!(value["id"], 1);
        assert_eq!(value["author"], "alice");
        assert_eq!(value["created_at"], "2024-05-01T10:00:00Z");
        assert_eq!(value["updated_at"], "2024-05-01T10:00:00Z");
    }
}
