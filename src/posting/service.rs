//! Posting service.
//!
//! Existence checks, ownership checks and view counting on top of
//! [`PostingRepository`].

use tracing::{debug, info};

use super::repository::PostingRepository;
use super::types::{NewPosting, Posting, PostingDetail, PostingFilter, PostingSummary, PostingUpdate};
use crate::auth::require_owner;
use crate::db::{CategoryRepository, DbPool, User};
use crate::error::Resource;
use crate::{PostingsError, Result};

/// Service for posting operations.
pub struct PostingService<'a> {
    pool: &'a DbPool,
}

impl<'a> PostingService<'a> {
    /// Create a new PostingService with the given pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    async fn ensure_category(&self, category_id: i64) -> Result<()> {
        if CategoryRepository::new(self.pool).exists(category_id).await? {
            Ok(())
        } else {
            Err(PostingsError::NotFound(Resource::Category))
        }
    }

    async fn get_posting(&self, posting_id: i64) -> Result<Posting> {
        PostingRepository::new(self.pool)
            .get_by_id(posting_id)
            .await?
            .ok_or(PostingsError::NotFound(Resource::Posting))
    }

    /// Create a posting authored by `author`.
    pub async fn create(
        &self,
        author: &User,
        category_id: i64,
        title: &str,
        content: &str,
    ) -> Result<Posting> {
        self.ensure_category(category_id).await?;

        let posting = PostingRepository::new(self.pool)
            .create(&NewPosting::new(category_id, author.id, title, content))
            .await?;

        info!(
            posting_id = posting.id,
            user_id = author.id,
            category_id,
            "Posting created"
        );
        Ok(posting)
    }

    /// List postings. A category filter must name an existing category.
    pub async fn list(&self, filter: &PostingFilter) -> Result<Vec<PostingSummary>> {
        if let Some(category_id) = filter.category_id {
            self.ensure_category(category_id).await?;
        }

        let postings = PostingRepository::new(self.pool).list(filter).await?;
        debug!(count = postings.len(), ?filter, "Listed postings");
        Ok(postings)
    }

    /// Get a posting's detail.
    ///
    /// An anonymous viewer (`viewer_id` is None) bumps the view counter once.
    /// The counter is read, incremented and written back, so concurrent
    /// anonymous reads can lose increments.
    pub async fn get(&self, posting_id: i64, viewer_id: Option<i64>) -> Result<PostingDetail> {
        let repo = PostingRepository::new(self.pool);
        let mut detail = repo
            .get_detail(posting_id)
            .await?
            .ok_or(PostingsError::NotFound(Resource::Posting))?;

        if viewer_id.is_none() {
            let views = detail.views + 1;
            repo.set_views(posting_id, views).await?;
            detail.views = views;
        }

        Ok(detail)
    }

    /// Update title and/or content. Only the author may do this.
    pub async fn update(
        &self,
        posting_id: i64,
        actor: &User,
        update: &PostingUpdate,
    ) -> Result<Posting> {
        let posting = self.get_posting(posting_id).await?;
        require_owner(actor, posting.user_id)?;

        let updated = PostingRepository::new(self.pool)
            .update(posting_id, update)
            .await?
            .ok_or(PostingsError::NotFound(Resource::Posting))?;

        info!(posting_id, user_id = actor.id, "Posting updated");
        Ok(updated)
    }

    /// Delete a posting and its comments. Only the author may do this.
    pub async fn delete(&self, posting_id: i64, actor: &User) -> Result<()> {
        let posting = self.get_posting(posting_id).await?;
        require_owner(actor, posting.user_id)?;

        if !PostingRepository::new(self.pool).delete(posting_id).await? {
            return Err(PostingsError::NotFound(Resource::Posting));
        }

        info!(posting_id, user_id = actor.id, "Posting deleted");
        Ok(())
    }
}
