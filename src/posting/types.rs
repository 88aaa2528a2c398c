//! Posting models.

/// Posting row.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Posting {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Number of anonymous reads.
    pub views: i64,
    pub category_id: i64,
    /// Author.
    pub user_id: i64,
    /// Creation timestamp (UTC, SQLite format).
    pub created_at: String,
}

/// Posting joined with its author's name, as shown in listings.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct PostingSummary {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub views: i64,
    pub category_id: i64,
    pub user_id: i64,
    pub author_name: String,
    pub created_at: String,
}

/// Full posting view with category name and comment count.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct PostingDetail {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub views: i64,
    pub category_id: i64,
    pub category_name: String,
    pub user_id: i64,
    pub author_name: String,
    pub created_at: String,
    /// All comments on the posting, replies included.
    pub comment_count: i64,
}

/// Data for creating a new posting.
#[derive(Debug, Clone)]
pub struct NewPosting {
    pub category_id: i64,
    pub user_id: i64,
    pub title: String,
    pub content: String,
}

impl NewPosting {
    /// Create a new posting with required fields.
    pub fn new(
        category_id: i64,
        user_id: i64,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            category_id,
            user_id,
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Partial update of a posting. Unset fields keep their value.
#[derive(Debug, Clone, Default)]
pub struct PostingUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostingUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set new title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set new content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Check if any fields are set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

/// Filters for listing postings. Both filters combine with AND.
#[derive(Debug, Clone, Default)]
pub struct PostingFilter {
    /// Case-insensitive substring of the title or the content.
    pub keyword: Option<String>,
    pub category_id: Option<i64>,
}

impl PostingFilter {
    /// Filter matching every posting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to postings whose title or content contains `keyword`.
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// Restrict to one category.
    pub fn category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posting_update_empty() {
        assert!(PostingUpdate::new().is_empty());
    }

    #[test]
    fn test_posting_update_builder() {
        let update = PostingUpdate::new().title("New Title");
        assert_eq!(update.title.as_deref(), Some("New Title"));
        assert!(update.content.is_none());
        assert!(!update.is_empty());
    }

    #[test]
    fn test_filter_builder() {
        let filter = PostingFilter::new().keyword("rust").category(3);
        assert_eq!(filter.keyword.as_deref(), Some("rust"));
        assert_eq!(filter.category_id, Some(3));
    }
}
