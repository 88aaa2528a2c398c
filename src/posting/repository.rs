//! Posting repository.

use sqlx::QueryBuilder;

use super::types::{NewPosting, Posting, PostingDetail, PostingFilter, PostingSummary, PostingUpdate};
use crate::db::{expect_unique, DbPool};
use crate::error::Resource;
use crate::{PostingsError, Result};

const POSTING_COLUMNS: &str =
    "id, title, content, views, category_id, user_id, created_at";

/// Case-insensitive substring match over title and content.
///
/// `needle` must already be lowercased. Folding is done with Unicode case
/// rules, which SQLite's `LIKE` only applies to ASCII.
fn contains_keyword(posting: &PostingSummary, needle: &str) -> bool {
    posting.title.to_lowercase().contains(needle)
        || posting.content.to_lowercase().contains(needle)
}

/// Repository for posting CRUD operations.
pub struct PostingRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> PostingRepository<'a> {
    /// Create a new PostingRepository with the given pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Insert a posting and return it with its assigned ID.
    pub async fn create(&self, new_posting: &NewPosting) -> Result<Posting> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO postings (title, content, category_id, user_id)
             VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(&new_posting.title)
        .bind(&new_posting.content)
        .bind(new_posting.category_id)
        .bind(new_posting.user_id)
        .fetch_one(self.pool)
        .await?;

        self.get_by_id(id)
            .await?
            .ok_or(PostingsError::NotFound(Resource::Posting))
    }

    /// Get a posting by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Posting>> {
        let rows = sqlx::query_as::<_, Posting>(&format!(
            "SELECT {POSTING_COLUMNS} FROM postings WHERE id = ?"
        ))
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        expect_unique(rows, Resource::Posting)
    }

    /// Get a posting with author, category and comment count.
    pub async fn get_detail(&self, id: i64) -> Result<Option<PostingDetail>> {
        let rows = sqlx::query_as::<_, PostingDetail>(
            "SELECT p.id, p.title, p.content, p.views, p.category_id,
                    c.name AS category_name, p.user_id, u.name AS author_name,
                    p.created_at,
                    (SELECT COUNT(*) FROM comments WHERE posting_id = p.id) AS comment_count
             FROM postings p
             JOIN users u ON u.id = p.user_id
             JOIN categories c ON c.id = p.category_id
             WHERE p.id = ?",
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        expect_unique(rows, Resource::Posting)
    }

    /// List postings matching the filter, oldest first.
    pub async fn list(&self, filter: &PostingFilter) -> Result<Vec<PostingSummary>> {
        let mut query: QueryBuilder<sqlx::Sqlite> = QueryBuilder::new(
            "SELECT p.id, p.title, p.content, p.views, p.category_id, p.user_id,
                    u.name AS author_name, p.created_at
             FROM postings p
             JOIN users u ON u.id = p.user_id
             WHERE 1 = 1",
        );

        if let Some(category_id) = filter.category_id {
            query.push(" AND p.category_id = ");
            query.push_bind(category_id);
        }
        query.push(" ORDER BY p.id ASC");

        let mut postings = query
            .build_query_as::<PostingSummary>()
            .fetch_all(self.pool)
            .await?;

        if let Some(ref keyword) = filter.keyword {
            let needle = keyword.to_lowercase();
            postings.retain(|posting| contains_keyword(posting, &needle));
        }
        Ok(postings)
    }

    /// Update a posting by ID.
    ///
    /// Only fields that are set in the update will be modified.
    /// Returns the updated posting, or None if not found.
    pub async fn update(&self, id: i64, update: &PostingUpdate) -> Result<Option<Posting>> {
        if update.is_empty() {
            return self.get_by_id(id).await;
        }

        let mut query: QueryBuilder<sqlx::Sqlite> = QueryBuilder::new("UPDATE postings SET ");
        let mut separated = query.separated(", ");

        if let Some(ref title) = update.title {
            separated.push("title = ");
            separated.push_bind_unseparated(title);
        }
        if let Some(ref content) = update.content {
            separated.push("content = ");
            separated.push_bind_unseparated(content);
        }

        query.push(" WHERE id = ");
        query.push_bind(id);

        let result = query.build().execute(self.pool).await?;
        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }

    /// Overwrite the view counter.
    pub async fn set_views(&self, id: i64, views: i64) -> Result<()> {
        sqlx::query("UPDATE postings SET views = ? WHERE id = ?")
            .bind(views)
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(())
    }

    /// Delete a posting by ID. Its comments go with it.
    ///
    /// Returns true if a posting was deleted, false if not found.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM postings WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
