//! Port-contract checks: the memory adapter behind `dyn` trait objects,
//! the way the services consume it.

use std::sync::Arc;

use chrono::Utc;
use domains::{Comment, FeedRepo, Post, Report, ReportRepo};
use storage_adapters::MemoryStore;

fn post(id: &str) -> Post {
    Post {
        id: id.to_string(),
        author: "Anonymous".to_string(),
        content: Some("text".to_string()),
        timestamp: Utc::now(),
        likes: 0,
        comments: Vec::new(),
    }
}

#[tokio::test]
async fn feed_port_prepends_and_lists() {
    let repo: Arc<dyn FeedRepo> = Arc::new(MemoryStore::new());

    repo.prepend_post(post("a")).await.unwrap();
    let posts = repo.prepend_post(post("b")).await.unwrap();

    let ids: Vec<_> = posts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["b", "a"]);
    assert_eq!(repo.list_posts().await.unwrap().len(), 2);
}

#[tokio::test]
async fn feed_port_increments_only_existing_posts() {
    let repo: Arc<dyn FeedRepo> = Arc::new(MemoryStore::new());
    repo.prepend_post(post("a")).await.unwrap();

    let posts = repo.increment_likes("a").await.unwrap();
    assert_eq!(posts[0].likes, 1);

    let posts = repo.increment_likes("zzz").await.unwrap();
    assert_eq!(posts[0].likes, 1);
}

#[tokio::test]
async fn feed_port_appends_comments_to_the_target() {
    let repo: Arc<dyn FeedRepo> = Arc::new(MemoryStore::new());
    repo.prepend_post(post("a")).await.unwrap();
    repo.prepend_post(post("b")).await.unwrap();

    let comment = Comment {
        id: "c".to_string(),
        author: "User".to_string(),
        content: Some("hi".to_string()),
        timestamp: Utc::now(),
    };
    let posts = repo.append_comment("a", comment).await.unwrap();

    let target = posts.iter().find(|p| p.id == "a").unwrap();
    let other = posts.iter().find(|p| p.id == "b").unwrap();
    assert_eq!(target.comments.len(), 1);
    assert!(other.comments.is_empty());
}

#[tokio::test]
async fn report_port_appends_in_arrival_order() {
    let store = Arc::new(MemoryStore::new());
    let repo: Arc<dyn ReportRepo> = store.clone();

    for n in 1..=2 {
        repo.append_report(Report {
            id: format!("r{n}"),
            received_at: Utc::now(),
            data: serde_json::json!(n),
        })
        .await
        .unwrap();
    }

    let reports = store.reports().unwrap();
    assert_eq!(reports[0].id, "r1");
    assert_eq!(reports[1].id, "r2");
}
