//! Comment handlers for Web API.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::comment::{CommentService, CommentUpdate};
use crate::web::dto::{
    ChildCommentItem, ChildCommentListResponse, CommentItem, CommentListResponse,
    CreateCommentRequest, JsonBody, PageQuery, PathParam, QueryParams, UpdateCommentRequest,
};
use crate::web::error::{ApiError, Success};
use crate::web::handlers::AppState;
use crate::web::middleware::AuthUser;

/// POST /postings/comments/:posting_id - Comment on a posting.
pub async fn create_comment(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    PathParam(posting_id): PathParam<i64>,
    JsonBody(req): JsonBody<CreateCommentRequest>,
) -> Result<Success, ApiError> {
    CommentService::new(state.db.pool())
        .create(posting_id, &user, &req.content, req.parent_comment_id)
        .await?;
    Ok(Success::created())
}

/// GET /postings/comments/:posting_id - List a page of top-level comments.
pub async fn list_comments(
    State(state): State<Arc<AppState>>,
    PathParam(posting_id): PathParam<i64>,
    QueryParams(query): QueryParams<PageQuery>,
) -> Result<Json<CommentListResponse>, ApiError> {
    let comments = CommentService::new(state.db.pool())
        .list_top_level(posting_id, query.page())
        .await?;

    let comment_list = comments
        .into_iter()
        .map(|c| CommentItem::from_comment(c, &state.formatter))
        .collect();
    Ok(Json(CommentListResponse { comment_list }))
}

/// GET /postings/comment/:comment_id - List a page of replies.
pub async fn list_child_comments(
    State(state): State<Arc<AppState>>,
    PathParam(comment_id): PathParam<i64>,
    QueryParams(query): QueryParams<PageQuery>,
) -> Result<Json<ChildCommentListResponse>, ApiError> {
    let comments = CommentService::new(state.db.pool())
        .list_children(comment_id, query.page())
        .await?;

    let child_comment_list = comments
        .into_iter()
        .map(|c| ChildCommentItem::from_comment(c, &state.formatter))
        .collect();
    Ok(Json(ChildCommentListResponse { child_comment_list }))
}

/// PATCH /postings/comment/:comment_id - Edit a comment.
pub async fn update_comment(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    PathParam(comment_id): PathParam<i64>,
    JsonBody(req): JsonBody<UpdateCommentRequest>,
) -> Result<Success, ApiError> {
    let update = CommentUpdate {
        content: req.content,
    };

    CommentService::new(state.db.pool())
        .update(comment_id, &user, &update)
        .await?;
    Ok(Success::created())
}

/// DELETE /postings/comment/:comment_id - Delete a comment.
pub async fn delete_comment(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    PathParam(comment_id): PathParam<i64>,
) -> Result<Success, ApiError> {
    CommentService::new(state.db.pool())
        .delete(comment_id, &user)
        .await?;
    Ok(Success::ok())
}
