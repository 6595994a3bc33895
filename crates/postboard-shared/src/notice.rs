//! Flash notices shown once after a redirect.

/// Severity of a notice, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Error => "error",
        }
    }
}

/// Outcome of a post operation reported on the next page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Created,
    Updated,
    Deleted,
    NotFound,
}

impl Notice {
    const ALL: [Notice; 4] = [
        Notice::Created,
        Notice::Updated,
        Notice::Deleted,
        Notice::NotFound,
    ];

    /// Stable code carried between requests.
    pub fn code(&self) -> &'static str {
        match self {
            Notice::Created => "created",
            Notice::Updated => "updated",
            Notice::Deleted => "deleted",
            Notice::NotFound => "not_found",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.code() == code)
    }

    pub fn level(&self) -> Level {
        match self {
            Notice::NotFound => Level::Error,
            _ => Level::Success,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Notice::Created => "Post created",
            Notice::Updated => "Post updated",
            Notice::Deleted => "Post deleted",
            Notice::NotFound => "Post not found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_resolve() {
        for notice in Notice::ALL {
            assert_eq!(Notice::from_code(notice.code()), Some(notice));
        }
        assert_eq!(Notice::from_code("<script>"), None);
    }

    #[test]
    fn test_not_found_is_error() {
        assert_eq!(Notice::NotFound.level(), Level::Error);
        assert_eq!(Notice::Deleted.level(), Level::Success);
    }
}
