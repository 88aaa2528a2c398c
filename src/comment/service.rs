//! Comment service.
//!
//! Threads are two levels deep: a reply to a reply is attached to the
//! thread's top-level comment instead.

use tracing::info;

use super::repository::CommentRepository;
use super::types::{ChildComment, Comment, CommentUpdate, NewComment, Pagination, TopLevelComment};
use crate::auth::require_owner;
use crate::db::{DbPool, User};
use crate::error::Resource;
use crate::posting::PostingRepository;
use crate::{PostingsError, Result};

/// Service for comment operations.
pub struct CommentService<'a> {
    pool: &'a DbPool,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService with the given pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    async fn ensure_posting(&self, posting_id: i64) -> Result<()> {
        PostingRepository::new(self.pool)
            .get_by_id(posting_id)
            .await?
            .map(|_| ())
            .ok_or(PostingsError::NotFound(Resource::Posting))
    }

    async fn get_comment(&self, comment_id: i64) -> Result<Comment> {
        CommentRepository::new(self.pool)
            .get_by_id(comment_id)
            .await?
            .ok_or(PostingsError::NotFound(Resource::Comment))
    }

    /// Comment on a posting, optionally as a reply to `parent_comment_id`.
    ///
    /// The parent must belong to the same posting.
    pub async fn create(
        &self,
        posting_id: i64,
        author: &User,
        content: &str,
        parent_comment_id: Option<i64>,
    ) -> Result<Comment> {
        self.ensure_posting(posting_id).await?;

        let mut new_comment = NewComment::new(posting_id, author.id, content);
        if let Some(parent_id) = parent_comment_id {
            let parent = self.get_comment(parent_id).await?;
            if parent.posting_id != posting_id {
                return Err(PostingsError::NotFound(Resource::Comment));
            }
            new_comment = new_comment.with_parent(parent.root_id());
        }

        let comment = CommentRepository::new(self.pool).create(&new_comment).await?;

        info!(
            comment_id = comment.id,
            posting_id,
            user_id = author.id,
            parent_comment_id = ?comment.parent_comment_id,
            "Comment created"
        );
        Ok(comment)
    }

    /// A page of a posting's top-level comments.
    pub async fn list_top_level(&self, posting_id: i64, page: i64) -> Result<Vec<TopLevelComment>> {
        self.ensure_posting(posting_id).await?;
        CommentRepository::new(self.pool)
            .list_top_level(posting_id, Pagination::page(page))
            .await
    }

    /// A page of a comment's replies.
    pub async fn list_children(&self, comment_id: i64, page: i64) -> Result<Vec<ChildComment>> {
        self.get_comment(comment_id).await?;
        CommentRepository::new(self.pool)
            .list_children(comment_id, Pagination::page(page))
            .await
    }

    /// Edit a comment. Only the author may do this.
    pub async fn update(
        &self,
        comment_id: i64,
        actor: &User,
        update: &CommentUpdate,
    ) -> Result<Comment> {
        let comment = self.get_comment(comment_id).await?;
        require_owner(actor, comment.user_id)?;

        let updated = CommentRepository::new(self.pool)
            .update(comment_id, update)
            .await?
            .ok_or(PostingsError::NotFound(Resource::Comment))?;

        info!(comment_id, user_id = actor.id, "Comment updated");
        Ok(updated)
    }

    /// Delete a comment. Only the author may do this.
    ///
    /// Replies of a deleted comment become top-level comments.
    pub async fn delete(&self, comment_id: i64, actor: &User) -> Result<()> {
        let comment = self.get_comment(comment_id).await?;
        require_owner(actor, comment.user_id)?;

        if !CommentRepository::new(self.pool).delete(comment_id).await? {
            return Err(PostingsError::NotFound(Resource::Comment));
        }

        info!(comment_id, user_id = actor.id, "Comment deleted");
        Ok(())
    }
}
