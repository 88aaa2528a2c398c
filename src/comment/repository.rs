//! Comment repository.

use super::types::{ChildComment, Comment, CommentUpdate, NewComment, Pagination, TopLevelComment};
use crate::db::{expect_unique, DbPool};
use crate::error::Resource;
use crate::{PostingsError, Result};

/// Repository for comment CRUD operations.
pub struct CommentRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> CommentRepository<'a> {
    /// Create a new CommentRepository with the given pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Insert a comment and return it with its assigned ID.
    pub async fn create(&self, new_comment: &NewComment) -> Result<Comment> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO comments (content, user_id, posting_id, parent_comment_id)
             VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(&new_comment.content)
        .bind(new_comment.user_id)
        .bind(new_comment.posting_id)
        .bind(new_comment.parent_comment_id)
        .fetch_one(self.pool)
        .await?;

        self.get_by_id(id)
            .await?
            .ok_or(PostingsError::NotFound(Resource::Comment))
    }

    /// Get a comment by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Comment>> {
        let rows = sqlx::query_as::<_, Comment>(
            "SELECT id, content, user_id, posting_id, parent_comment_id, created_at
             FROM comments WHERE id = ?",
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        expect_unique(rows, Resource::Comment)
    }

    /// List a page of a posting's top-level comments, oldest first.
    pub async fn list_top_level(
        &self,
        posting_id: i64,
        pagination: Pagination,
    ) -> Result<Vec<TopLevelComment>> {
        let comments = sqlx::query_as::<_, TopLevelComment>(
            "SELECT c.id, c.user_id, u.name AS author_name, c.content, c.created_at,
                    (SELECT COUNT(*) FROM comments r WHERE r.parent_comment_id = c.id)
                        AS child_count
             FROM comments c
             JOIN users u ON u.id = c.user_id
             WHERE c.posting_id = ? AND c.parent_comment_id IS NULL
             ORDER BY c.id ASC
             LIMIT ? OFFSET ?",
        )
        .bind(posting_id)
        .bind(pagination.limit)
        .bind(pagination.offset)
        .fetch_all(self.pool)
        .await?;
        Ok(comments)
    }

    /// List a page of a comment's direct replies, oldest first.
    pub async fn list_children(
        &self,
        parent_comment_id: i64,
        pagination: Pagination,
    ) -> Result<Vec<ChildComment>> {
        let comments = sqlx::query_as::<_, ChildComment>(
            "SELECT c.id, c.user_id, u.name AS author_name, c.content, c.created_at
             FROM comments c
             JOIN users u ON u.id = c.user_id
             WHERE c.parent_comment_id = ?
             ORDER BY c.id ASC
             LIMIT ? OFFSET ?",
        )
        .bind(parent_comment_id)
        .bind(pagination.limit)
        .bind(pagination.offset)
        .fetch_all(self.pool)
        .await?;
        Ok(comments)
    }

    /// Update a comment by ID.
    ///
    /// Returns the updated comment, or None if not found.
    pub async fn update(&self, id: i64, update: &CommentUpdate) -> Result<Option<Comment>> {
        let Some(ref content) = update.content else {
            return self.get_by_id(id).await;
        };

        let result = sqlx::query("UPDATE comments SET content = ? WHERE id = ?")
            .bind(content)
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }

    /// Delete a comment by ID. Its replies stay and become top-level.
    ///
    /// Returns true if a comment was deleted, false if not found.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
