//! Redis-backed key-value store.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use std::time::Duration;
use tracing::{debug, info};

use crate::domain::repositories::{KvStore, StoreError, StoreResult};

/// Number of keys Redis is asked to inspect per `SCAN` page.
const SCAN_PAGE_SIZE: usize = 500;

/// Redis implementation of [`KvStore`].
///
/// Uses `ConnectionManager` for connection reuse and reconnects. Every key is
/// namespaced with `key_prefix` so the service can share a Redis database.
/// Unlike a cache, failures are propagated: the store is the system of record.
pub struct RedisStore {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `key_prefix` - namespace prepended to every key (e.g., `"analytics:"`)
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the connection cannot
    /// be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, key_prefix: &str) -> StoreResult<Self> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            StoreError::Connection(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self {
            client: manager,
            key_prefix: key_prefix.to_string(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

/// Escapes glob metacharacters so `prefix` matches literally in `SCAN MATCH`.
fn escape_glob(prefix: &str) -> String {
    let mut escaped = String::with_capacity(prefix.len());
    for c in prefix.chars() {
        if matches!(c, '*' | '?' | '[' | ']' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn operation_error(op: &str, key: &str, e: redis::RedisError) -> StoreError {
    StoreError::Operation(format!("Redis {} failed for '{}': {}", op, key, e))
}

#[async_trait]
impl KvStore for RedisStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let full_key = self.build_key(key);
        let mut conn = self.client.clone();

        conn.get::<_, Option<String>>(&full_key)
            .await
            .map_err(|e| operation_error("GET", key, e))
    }

    async fn put(&self, key: &str, value: &str, ttl: Option<Duration>) -> StoreResult<()> {
        let full_key = self.build_key(key);
        let mut conn = self.client.clone();

        match ttl {
            Some(ttl) => {
                // SET EX rejects a zero expiry
                let seconds = ttl.as_secs().max(1);
                conn.set_ex::<_, _, ()>(&full_key, value, seconds)
                    .await
                    .map_err(|e| operation_error("SET EX", key, e))?;
                debug!("Store SET: {} (TTL: {}s)", key, seconds);
            }
            None => {
                conn.set::<_, _, ()>(&full_key, value)
                    .await
                    .map_err(|e| operation_error("SET", key, e))?;
                debug!("Store SET: {}", key);
            }
        }

        Ok(())
    }

    async fn list(&self, prefix: &str) -> StoreResult<Vec<String>> {
        let pattern = format!("{}*", escape_glob(&self.build_key(prefix)));
        let mut conn = self.client.clone();

        let mut keys = Vec::new();
        let mut cursor: u64 = 0;
        let mut pages = 0usize;

        loop {
            let (next, batch): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(&pattern)
                .arg("COUNT")
                .arg(SCAN_PAGE_SIZE)
                .query_async(&mut conn)
                .await
                .map_err(|e| operation_error("SCAN", prefix, e))?;

            pages += 1;
            keys.extend(
                batch
                    .into_iter()
                    .filter_map(|k| k.strip_prefix(&self.key_prefix).map(str::to_string)),
            );

            if next == 0 {
                break;
            }
            cursor = next;
        }

        // SCAN may return a key more than once
        keys.sort();
        keys.dedup();

        debug!(
            "Store LIST: {} -> {} keys in {} pages",
            prefix,
            keys.len(),
            pages
        );

        Ok(keys)
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
