//! Key-value store backends.
//!
//! Provides two [`crate::domain::repositories::KvStore`] implementations:
//! - [`RedisStore`] - Production Redis-backed store with native key expiry
//! - [`MemoryStore`] - Process-local store for development and tests

mod memory_store;
mod redis_store;

pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;
