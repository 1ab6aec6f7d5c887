//! # api-adapters
//!
//! The web routing and orchestration layer for haven-board. Everything in
//! here is gated behind the `web-axum` feature so the domain crates build
//! without the web stack.

#[cfg(feature = "web-axum")]
pub mod error;
#[cfg(feature = "web-axum")]
pub mod handlers;
#[cfg(feature = "web-axum")]
pub mod middleware;
#[cfg(feature = "web-axum")]
pub mod router;
