use chrono::{DateTime, Utc};

use crate::error::DomainError;

/// Identifier assigned by the persistence layer.
pub type PostId = i64;

/// Post entity - represents a blog post.
///
/// A post with `deleted_at` set is soft-deleted and invisible to every read
/// exposed by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub title: String,
    pub body: String,
}

impl Post {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Input for creating a post. Ids and timestamps are assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub body: String,
}

impl NewPost {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Both fields must be non-empty.
    pub fn validate(&self) -> Result<(), DomainError> {
        require_non_empty("title", &self.title)?;
        require_non_empty("body", &self.body)
    }
}

/// Partial update. `None` keeps the stored value, `Some` overwrites it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub body: Option<String>,
}

impl PostPatch {
    /// Fields that are present must be non-empty.
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(title) = &self.title {
            require_non_empty("title", title)?;
        }
        if let Some(body) = &self.body {
            require_non_empty("body", body)?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none()
    }

    /// Overwrite the present fields of `post`.
    pub fn apply_to(self, post: &mut Post) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(body) = self.body {
            post.body = body;
        }
    }
}

/// Parse a raw path segment into a post id.
///
/// Anything that is not an integer can never match a row, so callers treat
/// `None` exactly like a missing post.
pub fn parse_post_id(raw: &str) -> Option<PostId> {
    raw.trim().parse().ok()
}

fn require_non_empty(field: &str, value: &str) -> Result<(), DomainError> {
    if value.is_empty() {
        return Err(DomainError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}
