//! Store trait definition.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::StoreError;

/// A key-value store with per-write expiry.
///
/// This is the only capability the cache-aside layer needs. Implementations
/// must be safe to share across tasks; both operations are the sole
/// suspension points of a pricing request.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Looks up a key. Absent and expired entries both return `Ok(None)`.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores a value under a key, expiring after `ttl`.
    ///
    /// Overwrites any existing entry; last write wins.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError>;
}
