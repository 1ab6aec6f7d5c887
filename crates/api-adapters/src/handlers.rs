//! # Handlers
//!
//! This module coordinates the flow between HTTP requests and the services.
//! Bodies are decoded leniently: the contract absorbs malformed or missing
//! JSON silently, so handlers read raw bytes and fall back to defaults
//! instead of letting the framework reject the request.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use domains::{Post, ReportReceipt};
use services::{FeedService, ReportService};

use crate::error::ApiResult;

/// State shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub feed: FeedService,
    pub reports: ReportService,
}

/// Body accepted by post and comment creation. Every field is optional;
/// anything unreadable decodes to the empty submission.
#[derive(Debug, Default, Deserialize)]
pub struct SubmissionBody {
    pub author: Option<String>,
    pub content: Option<String>,
}

/// Decodes a JSON body without ever rejecting the request.
fn lenient_json<T>(body: &Bytes) -> T
where
    T: Default + for<'de> Deserialize<'de>,
{
    serde_json::from_slice(body).unwrap_or_default()
}

/// GET /api/posts/
pub async fn list_posts(State(state): State<AppState>) -> ApiResult<Json<Vec<Post>>> {
    Ok(Json(state.feed.list_posts().await?))
}

/// POST /api/posts/
pub async fn create_post(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<Vec<Post>>> {
    let submission: SubmissionBody = lenient_json(&body);
    Ok(Json(
        state
            .feed
            .create_post(submission.author, submission.content)
            .await?,
    ))
}

/// POST /api/posts/{post_id}/like/
pub async fn like_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> ApiResult<Json<Vec<Post>>> {
    Ok(Json(state.feed.like_post(&post_id).await?))
}

/// POST /api/posts/{post_id}/comments/
pub async fn add_comment(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<Vec<Post>>> {
    let submission: SubmissionBody = lenient_json(&body);
    Ok(Json(
        state
            .feed
            .add_comment(&post_id, submission.author, submission.content)
            .await?,
    ))
}

/// POST /api/reports/
///
/// The payload is arbitrary JSON, stored verbatim. An unreadable body is
/// recorded as JSON null rather than refused.
pub async fn create_report(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<ReportReceipt>> {
    let data: serde_json::Value = lenient_json(&body);
    Ok(Json(state.reports.create_report(data).await?))
}
