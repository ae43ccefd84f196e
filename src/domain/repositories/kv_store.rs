//! Key-value store capability the service is built on.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors reported by a key-value backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store connection error: {0}")]
    Connection(String),
    #[error("Store operation error: {0}")]
    Operation(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// An eventually consistent key-value store.
///
/// The contract is deliberately small: no transactions, no multi-key
/// operations, no atomic increment. A value written by one call may not be
/// visible to a `get` or `list` issued right after it, and nothing orders
/// calls made by different requests.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - Redis-backed store
/// - [`crate::infrastructure::store::MemoryStore`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if it is absent or expired.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// With `ttl` set, the entry expires on its own after that duration.
    async fn put(&self, key: &str, value: &str, ttl: Option<Duration>) -> StoreResult<()>;

    /// Lists every live key starting with `prefix`, sorted ascending.
    async fn list(&self, prefix: &str) -> StoreResult<Vec<String>>;

    /// Checks if the backend is reachable.
    async fn health_check(&self) -> bool;
}
