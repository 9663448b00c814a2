//! In-memory storage backend.
//!
//! Stores users in a `HashMap` behind a `tokio::sync::RwLock`. Used by the
//! `memory` store mode and by the router tests. Nothing is persisted.

mod repository;

pub use repository::InMemoryRepository;
