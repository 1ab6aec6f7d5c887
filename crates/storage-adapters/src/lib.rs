//! # storage-adapters
//!
//! Concrete storage behind the domain ports. The only adapter today is the
//! in-memory store; the ports stay async so a persistent adapter could
//! slot in without touching the services.

pub mod memory;

pub use memory::MemoryStore;
