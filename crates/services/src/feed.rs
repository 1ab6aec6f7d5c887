//! # FeedService
//!
//! Coordinates feed mutations: stamps identity and time, applies author
//! defaults, and delegates storage to the [`FeedRepo`] port. Unknown post
//! ids are absorbed silently; callers always get the current collection
//! back with a success status.

use std::sync::Arc;

use chrono::Utc;
use domains::{Comment, FeedRepo, Post, Result};
use tracing::debug;
use uuid::Uuid;

/// Author recorded when a post is submitted without one.
const DEFAULT_POST_AUTHOR: &str = "Anonymous";

/// Author recorded when a comment is submitted without one.
const DEFAULT_COMMENT_AUTHOR: &str = "User";

#[derive(Clone)]
pub struct FeedService {
    repo: Arc<dyn FeedRepo>,
}

impl FeedService {
    pub fn new(repo: Arc<dyn FeedRepo>) -> Self {
        Self { repo }
    }

    /// Full collection, newest first. No side effects.
    pub async fn list_posts(&self) -> Result<Vec<Post>> {
        self.repo.list_posts().await
    }

    /// Creates a post and returns the updated collection.
    ///
    /// Content passes through verbatim, absent content included. The new
    /// post lands at the front of the feed.
    pub async fn create_post(
        &self,
        author: Option<String>,
        content: Option<String>,
    ) -> Result<Vec<Post>> {
        let post = Post {
            id: Uuid::new_v4().to_string(),
            author: author.unwrap_or_else(|| DEFAULT_POST_AUTHOR.to_string()),
            content,
            timestamp: Utc::now(),
            likes: 0,
            comments: Vec::new(),
        };
        debug!(post_id = %post.id, author = %post.author, "creating post");
        self.repo.prepend_post(post).await
    }

    /// Adds one like to `post_id` and returns the collection. An unknown
    /// id changes nothing; the caller cannot tell the difference.
    pub async fn like_post(&self, post_id: &str) -> Result<Vec<Post>> {
        debug!(%post_id, "like received");
        self.repo.increment_likes(post_id).await
    }

    /// Appends a comment to `post_id` and returns the collection. An
    /// unknown id changes nothing.
    pub async fn add_comment(
        &self,
        post_id: &str,
        author: Option<String>,
        content: Option<String>,
    ) -> Result<Vec<Post>> {
        let comment = Comment {
            id: Uuid::new_v4().to_string(),
            author: author.unwrap_or_else(|| DEFAULT_COMMENT_AUTHOR.to_string()),
            content,
            timestamp: Utc::now(),
        };
        debug!(%post_id, comment_id = %comment.id, "adding comment");
        self.repo.append_comment(post_id, comment).await
    }
}
