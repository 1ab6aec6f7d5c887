//! # Domain Models
//!
//! These structs represent the core entities of the haven-board feed.
//! Identifiers are opaque strings: generated ids are UUIDs in string form,
//! while the launch fixtures use short literal ids.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-authored content item with likes and nested comments.
///
/// Field order matches the wire shape clients already consume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub author: String,
    /// Free text, stored verbatim. Absent content stays JSON `null`.
    pub content: Option<String>,
    /// Set once at creation, never updated afterwards.
    pub timestamp: DateTime<Utc>,
    pub likes: u64,
    /// Insertion order, append-only.
    pub comments: Vec<Comment>,
}

/// A reply attached to exactly one post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub content: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// An abuse/flag submission, held in arrival order for later review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub received_at: DateTime<Utc>,
    /// Payload captured verbatim from the caller. No schema is enforced.
    pub data: serde_json::Value,
}

/// Acknowledgement returned to the caller once a report is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportReceipt {
    pub status: String,
    pub report_id: String,
}

impl ReportReceipt {
    /// Storing a report cannot fail short of the store itself failing,
    /// so the only receipt ever issued is a success.
    pub fn success(report_id: String) -> Self {
        Self {
            status: "success".to_string(),
            report_id,
        }
    }
}
