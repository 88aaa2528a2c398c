//! Posting handlers for Web API.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::posting::{PostingFilter, PostingService, PostingUpdate};
use crate::web::dto::{
    CreatePostingRequest, JsonBody, ListPostingsQuery, PathParam, PostingInfo,
    PostingInfoResponse, PostingListItem, PostingListResponse, QueryParams, UpdatePostingRequest,
};
use crate::web::error::{ApiError, Success};
use crate::web::handlers::AppState;
use crate::web::middleware::{AuthUser, OptionalAuthUser};

/// POST /postings - Create a posting.
pub async fn create_posting(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    JsonBody(req): JsonBody<CreatePostingRequest>,
) -> Result<Success, ApiError> {
    PostingService::new(state.db.pool())
        .create(&user, req.category_id, &req.title, &req.content)
        .await?;
    Ok(Success::created())
}

/// GET /postings - List postings, optionally filtered by keyword and category.
pub async fn list_postings(
    State(state): State<Arc<AppState>>,
    QueryParams(query): QueryParams<ListPostingsQuery>,
) -> Result<Json<PostingListResponse>, ApiError> {
    let mut filter = PostingFilter::new();
    if let Some(keyword) = query.keyword() {
        filter = filter.keyword(keyword);
    }
    if let Some(category_id) = query.category_id {
        filter = filter.category(category_id);
    }

    let postings = PostingService::new(state.db.pool()).list(&filter).await?;

    let posting_list = postings
        .into_iter()
        .map(|p| PostingListItem::from_summary(p, &state.formatter))
        .collect();
    Ok(Json(PostingListResponse { posting_list }))
}

/// GET /postings/:id - Get a posting.
///
/// Reads without a valid token count as a view.
pub async fn get_posting(
    State(state): State<Arc<AppState>>,
    OptionalAuthUser(viewer): OptionalAuthUser,
    PathParam(posting_id): PathParam<i64>,
) -> Result<Json<PostingInfoResponse>, ApiError> {
    let detail = PostingService::new(state.db.pool())
        .get(posting_id, viewer.map(|u| u.id))
        .await?;

    Ok(Json(PostingInfoResponse {
        posting_info: PostingInfo::from_detail(detail, &state.formatter),
    }))
}

/// POST /postings/:id - Update a posting's title and/or content.
pub async fn update_posting(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    PathParam(posting_id): PathParam<i64>,
    JsonBody(req): JsonBody<UpdatePostingRequest>,
) -> Result<Success, ApiError> {
    let mut update = PostingUpdate::new();
    if let Some(title) = req.title {
        update = update.title(title);
    }
    if let Some(content) = req.content {
        update = update.content(content);
    }

    PostingService::new(state.db.pool())
        .update(posting_id, &user, &update)
        .await?;
    Ok(Success::created())
}

/// DELETE /postings/:id - Delete a posting and its comments.
pub async fn delete_posting(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    PathParam(posting_id): PathParam<i64>,
) -> Result<Success, ApiError> {
    PostingService::new(state.db.pool())
        .delete(posting_id, &user)
        .await?;
    Ok(Success::ok())
}
