//! Router configuration for Web API.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_comment, create_posting, delete_comment, delete_posting, get_posting,
    list_child_comments, list_comments, list_postings, update_comment, update_posting, AppState,
};
use super::middleware::create_cors_layer;

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let posting_routes = Router::new()
        .route("/", get(list_postings).post(create_posting))
        .route(
            "/:posting_id",
            get(get_posting).post(update_posting).delete(delete_posting),
        )
        .route(
            "/comments/:posting_id",
            get(list_comments).post(create_comment),
        )
        .route(
            "/comment/:comment_id",
            get(list_child_comments)
                .patch(update_comment)
                .delete(delete_comment),
        );

    Router::new()
        .nest("/postings", posting_routes)
        .merge(create_health_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins)),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
