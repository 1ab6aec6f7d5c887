//! # MemoryStore
//!
//! Process-lifetime implementation of the feed and report ports. One lock
//! guards every collection, so each operation is a single read-modify-write
//! and concurrent likes on the same post are never lost. Nothing survives
//! process exit.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use domains::{Comment, DomainError, FeedRepo, Post, Report, ReportRepo, Result};
use tracing::debug;

pub struct MemoryStore {
    state: Mutex<StoreState>,
}

#[derive(Default)]
struct StoreState {
    /// Newest first. New posts are prepended.
    posts: Vec<Post>,
    /// Arrival order. Reports are appended.
    reports: Vec<Report>,
}

impl MemoryStore {
    /// Empty store, no fixtures.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StoreState::default()),
        }
    }

    /// Store pre-loaded with the two launch posts a fresh feed shows.
    /// Fixture timestamps are stamped at construction.
    pub fn seeded() -> Self {
        let now = Utc::now();
        let posts = vec![
            Post {
                id: "1".to_string(),
                author: "Sarah Jenkins".to_string(),
                content: Some(
                    "Recovery is not a straight line. Some days are harder than \
                     others, but finding a community that understands has been my \
                     saving grace."
                        .to_string(),
                ),
                timestamp: now,
                likes: 24,
                comments: vec![Comment {
                    id: "c1".to_string(),
                    author: "Mike T.".to_string(),
                    content: Some("Thank you for sharing this.".to_string()),
                    timestamp: now,
                }],
            },
            Post {
                id: "2".to_string(),
                author: "Anonymous".to_string(),
                content: Some(
                    "Today marks one year since I left my abusive situation. \
                     Freedom is worth every struggle."
                        .to_string(),
                ),
                timestamp: now,
                likes: 156,
                comments: Vec::new(),
            },
        ];

        Self {
            state: Mutex::new(StoreState {
                posts,
                reports: Vec::new(),
            }),
        }
    }

    /// Snapshot of the stored reports, for tests and operator tooling.
    pub fn reports(&self) -> Result<Vec<Report>> {
        Ok(self.locked()?.reports.clone())
    }

    fn locked(&self) -> Result<MutexGuard<'_, StoreState>> {
        self.state.lock().map_err(|_| DomainError::StorePoisoned)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedRepo for MemoryStore {
    async fn list_posts(&self) -> Result<Vec<Post>> {
        Ok(self.locked()?.posts.clone())
    }

    async fn prepend_post(&self, post: Post) -> Result<Vec<Post>> {
        let mut state = self.locked()?;
        state.posts.insert(0, post);
        Ok(state.posts.clone())
    }

    async fn increment_likes(&self, post_id: &str) -> Result<Vec<Post>> {
        let mut state = self.locked()?;
        match state.posts.iter_mut().find(|p| p.id == post_id) {
            Some(post) => post.likes += 1,
            None => debug!(%post_id, "like for unknown post, feed unchanged"),
        }
        Ok(state.posts.clone())
    }

    async fn append_comment(&self, post_id: &str, comment: Comment) -> Result<Vec<Post>> {
        let mut state = self.locked()?;
        match state.posts.iter_mut().find(|p| p.id == post_id) {
            Some(post) => post.comments.push(comment),
            None => debug!(%post_id, "comment for unknown post, feed unchanged"),
        }
        Ok(state.posts.clone())
    }
}

#[async_trait]
impl ReportRepo for MemoryStore {
    async fn append_report(&self, report: Report) -> Result<()> {
        self.locked()?.reports.push(report);
        Ok(())
    }
}
