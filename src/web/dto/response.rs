//! Response DTOs for Web API.
//!
//! Timestamps are rendered with the server's [`DateTimeFormatter`].

use serde::Serialize;

use crate::comment::{ChildComment, TopLevelComment};
use crate::datetime::DateTimeFormatter;
use crate::posting::{PostingDetail, PostingSummary};

/// Posting as listed by `GET /postings`.
#[derive(Debug, Serialize)]
pub struct PostingListItem {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category_id: i64,
    /// Author name.
    pub name: String,
    pub user_id: i64,
    pub views: i64,
    pub created_at: String,
}

impl PostingListItem {
    pub fn from_summary(posting: PostingSummary, formatter: &DateTimeFormatter) -> Self {
        Self {
            created_at: formatter.format(&posting.created_at),
            id: posting.id,
            title: posting.title,
            content: posting.content,
            category_id: posting.category_id,
            name: posting.author_name,
            user_id: posting.user_id,
            views: posting.views,
        }
    }
}

/// `{"posting_list": [...]}`
#[derive(Debug, Serialize)]
pub struct PostingListResponse {
    pub posting_list: Vec<PostingListItem>,
}

/// Posting detail.
#[derive(Debug, Serialize)]
pub struct PostingInfo {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category_id: i64,
    pub category: String,
    /// Author name.
    pub name: String,
    pub user_id: i64,
    pub views: i64,
    pub comment_count: i64,
    pub created_at: String,
}

impl PostingInfo {
    pub fn from_detail(posting: PostingDetail, formatter: &DateTimeFormatter) -> Self {
        Self {
            created_at: formatter.format(&posting.created_at),
            id: posting.id,
            title: posting.title,
            content: posting.content,
            category_id: posting.category_id,
            category: posting.category_name,
            name: posting.author_name,
            user_id: posting.user_id,
            views: posting.views,
            comment_count: posting.comment_count,
        }
    }
}

/// `{"posting_info": {...}}`
#[derive(Debug, Serialize)]
pub struct PostingInfoResponse {
    pub posting_info: PostingInfo,
}

/// Top-level comment.
#[derive(Debug, Serialize)]
pub struct CommentItem {
    pub id: i64,
    pub user_id: i64,
    /// Author name.
    pub name: String,
    pub content: String,
    pub created_at: String,
    /// Number of direct replies.
    pub child_comment_count: i64,
}

impl CommentItem {
    pub fn from_comment(comment: TopLevelComment, formatter: &DateTimeFormatter) -> Self {
        Self {
            created_at: formatter.format(&comment.created_at),
            id: comment.id,
            user_id: comment.user_id,
            name: comment.author_name,
            content: comment.content,
            child_comment_count: comment.child_count,
        }
    }
}

/// `{"comment_list": [...]}`
#[derive(Debug, Serialize)]
pub struct CommentListResponse {
    pub comment_list: Vec<CommentItem>,
}

/// Reply to a top-level comment.
#[derive(Debug, Serialize)]
pub struct ChildCommentItem {
    pub id: i64,
    pub user_id: i64,
    /// Author name.
    pub name: String,
    pub content: String,
    pub created_at: String,
}

impl ChildCommentItem {
    pub fn from_comment(comment: ChildComment, formatter: &DateTimeFormatter) -> Self {
        Self {
            created_at: formatter.format(&comment.created_at),
            id: comment.id,
            user_id: comment.user_id,
            name: comment.author_name,
            content: comment.content,
        }
    }
}

/// `{"child_comment_list": [...]}`
#[derive(Debug, Serialize)]
pub struct ChildCommentListResponse {
    pub child_comment_list: Vec<ChildCommentItem>,
}
