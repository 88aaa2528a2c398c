//! Comment models and pagination.

/// Number of comments per page.
pub const COMMENT_PAGE_SIZE: i64 = 5;

/// Comment row.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    /// Author.
    pub user_id: i64,
    pub posting_id: i64,
    /// None for a top-level comment.
    pub parent_comment_id: Option<i64>,
    pub created_at: String,
}

impl Comment {
    /// The top-level comment of this comment's thread.
    pub fn root_id(&self) -> i64 {
        self.parent_comment_id.unwrap_or(self.id)
    }
}

/// Top-level comment as listed under a posting.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct TopLevelComment {
    pub id: i64,
    pub user_id: i64,
    pub author_name: String,
    pub content: String,
    pub created_at: String,
    /// Number of direct replies.
    pub child_count: i64,
}

/// Reply as listed under its parent comment.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ChildComment {
    pub id: i64,
    pub user_id: i64,
    pub author_name: String,
    pub content: String,
    pub created_at: String,
}

/// Data for creating a new comment.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub posting_id: i64,
    pub user_id: i64,
    pub content: String,
    pub parent_comment_id: Option<i64>,
}

impl NewComment {
    /// Create a new top-level comment.
    pub fn new(posting_id: i64, user_id: i64, content: impl Into<String>) -> Self {
        Self {
            posting_id,
            user_id,
            content: content.into(),
            parent_comment_id: None,
        }
    }

    /// Make this comment a reply to `parent_comment_id`.
    pub fn with_parent(mut self, parent_comment_id: i64) -> Self {
        self.parent_comment_id = Some(parent_comment_id);
        self
    }
}

/// Partial update of a comment. Unset fields keep their value.
#[derive(Debug, Clone, Default)]
pub struct CommentUpdate {
    pub content: Option<String>,
}

impl CommentUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set new content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Check if any fields are set.
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }
}

/// Offset/limit window over a comment listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Number of items to skip.
    pub offset: i64,
    /// Maximum number of items to return.
    pub limit: i64,
}

impl Pagination {
    /// Window for a 1-indexed page of [`COMMENT_PAGE_SIZE`] items.
    ///
    /// Pages below 1 are treated as page 1.
    pub fn page(page: i64) -> Self {
        let page = page.max(1);
        Self {
            offset: (page - 1).saturating_mul(COMMENT_PAGE_SIZE),
            limit: COMMENT_PAGE_SIZE,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::page(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(id: i64, parent: Option<i64>) -> Comment {
        Comment {
            id,
            content: "Test".to_string(),
            user_id: 1,
            posting_id: 1,
            parent_comment_id: parent,
            created_at: "2024-01-01 00:00:00".to_string(),
        }
    }

    #[test]
    fn test_root_id() {
        assert_eq!(comment(3, None).root_id(), 3);
        assert_eq!(comment(4, Some(3)).root_id(), 3);
    }

    #[test]
    fn test_new_comment() {
        let c = NewComment::new(1, 2, "Hello").with_parent(9);
        assert_eq!(c.posting_id, 1);
        assert_eq!(c.user_id, 2);
        assert_eq!(c.content, "Hello");
        assert_eq!(c.parent_comment_id, Some(9));
    }

    #[test]
    fn test_pagination_page() {
        let first = Pagination { offset: 0, limit: 5 };
        assert_eq!(Pagination::page(1), first);
        assert_eq!(Pagination::page(2), Pagination { offset: 5, limit: 5 });
        assert_eq!(Pagination::page(0), first);
        assert_eq!(Pagination::page(-3), first);
        assert_eq!(Pagination::page(i64::MAX).offset, i64::MAX);
    }

    #[test]
    fn test_comment_update() {
        assert!(CommentUpdate::new().is_empty());
        assert!(!CommentUpdate::new().content("x").is_empty());
    }
}
