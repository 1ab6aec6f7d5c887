//! # services
//!
//! Orchestration between the HTTP adapters and the storage ports.

pub mod feed;
pub mod reports;

pub use feed::FeedService;
pub use reports::ReportService;
