//! Route table for the feed and report surface.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{self, AppState};

/// The `/api` routes. Trailing slashes are part of the contract the
/// existing clients rely on.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/posts/",
            get(handlers::list_posts).post(handlers::create_post),
        )
        .route("/posts/{post_id}/like/", post(handlers::like_post))
        .route("/posts/{post_id}/comments/", post(handlers::add_comment))
        .route("/reports/", post(handlers::create_report))
}

/// Full application router with the routes mounted under `/api`.
pub fn router(state: AppState) -> Router {
    Router::new().nest("/api", routes()).with_state(state)
}
