//! # Core Traits (Ports)
//!
//! Storage adapters implement these traits to back the services. The
//! mutating feed operations return the full updated collection so that
//! mutation and snapshot happen as one atomic step inside the adapter.

use async_trait::async_trait;
#[cfg(any(test, feature = "testing"))]
use mockall::automock;

use crate::error::Result;
use crate::models::{Comment, Post, Report};

/// Storage contract for the post feed.
#[cfg_attr(any(test, feature = "testing"), automock)]
#[async_trait]
pub trait FeedRepo: Send + Sync {
    /// Full collection, newest first, comments embedded.
    async fn list_posts(&self) -> Result<Vec<Post>>;

    /// Inserts at the front of the collection.
    async fn prepend_post(&self, post: Post) -> Result<Vec<Post>>;

    /// Adds one like to the matching post. An unknown id leaves the
    /// collection untouched.
    async fn increment_likes(&self, post_id: &str) -> Result<Vec<Post>>;

    /// Appends to the matching post's comment list. An unknown id leaves
    /// the collection untouched.
    async fn append_comment(&self, post_id: &str, comment: Comment) -> Result<Vec<Post>>;
}

/// Storage contract for abuse reports.
#[cfg_attr(any(test, feature = "testing"), automock)]
#[async_trait]
pub trait ReportRepo: Send + Sync {
    /// Appends in arrival order.
    async fn append_report(&self, report: Report) -> Result<()>;
}
