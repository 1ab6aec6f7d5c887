//! # DomainError
//!
//! Centralized error handling for the haven-board core. The feed contract
//! absorbs unmatched ids and malformed input silently, so the only failures
//! that can cross a port boundary come from the store itself.

use thiserror::Error;

/// The primary error type for all port operations.
#[derive(Error, Debug)]
pub enum DomainError {
    /// The shared store lock was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    StorePoisoned,
}

/// A specialized Result type for haven-board logic.
pub type Result<T> = std::result::Result<T, DomainError>;
