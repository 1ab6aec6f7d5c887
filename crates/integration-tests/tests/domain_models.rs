//! Wire-shape checks for the domain models.

use chrono::Utc;
use domains::{Comment, Post, Report, ReportReceipt};
use serde_json::json;

fn sample_post() -> Post {
    Post {
        id: "p1".to_string(),
        author: "Sarah".to_string(),
        content: Some("hello".to_string()),
        timestamp: Utc::now(),
        likes: 3,
        comments: vec![Comment {
            id: "c1".to_string(),
            author: "User".to_string(),
            content: None,
            timestamp: Utc::now(),
        }],
    }
}

#[test]
fn post_exposes_the_expected_keys() {
    let value = serde_json::to_value(sample_post()).unwrap();
    let object = value.as_object().unwrap();
    for key in ["id", "author", "content", "timestamp", "likes", "comments"] {
        assert!(object.contains_key(key), "missing key {key}");
    }
    assert_eq!(object.len(), 6);
}

#[test]
fn comment_content_may_be_null_on_the_wire() {
    let value = serde_json::to_value(sample_post()).unwrap();
    assert!(value["comments"][0]["content"].is_null());
}

#[test]
fn post_round_trips_through_json() {
    let post = sample_post();
    let value = serde_json::to_value(&post).unwrap();
    let back: Post = serde_json::from_value(value).unwrap();
    assert_eq!(back.id, post.id);
    assert_eq!(back.likes, post.likes);
    assert_eq!(back.comments.len(), 1);
}

#[test]
fn report_keeps_arbitrary_payloads() {
    let report = Report {
        id: "r1".to_string(),
        received_at: Utc::now(),
        data: json!({"anything": ["goes", 1, null, {"deep": true}]}),
    };
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["data"]["anything"][3]["deep"], true);
}

#[test]
fn receipt_serializes_status_and_id() {
    let value = serde_json::to_value(ReportReceipt::success("r9".to_string())).unwrap();
    assert_eq!(value, json!({"status": "success", "report_id": "r9"}));
}
