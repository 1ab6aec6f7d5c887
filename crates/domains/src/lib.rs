//! haven-board/crates/domains/src/lib.rs
//!
//! The central domain entities and port definitions for haven-board.

pub mod error;
pub mod models;
pub mod traits;

// Re-exporting for easier access in other crates
pub use error::*;
pub use models::*;
pub use traits::*;
