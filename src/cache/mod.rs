use std::time::Duration;

pub mod memory;
pub mod store_redis;

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("key not found")]
    NotFound,
    #[error("redis: {0}")]
    Redis(#[from] redis::RedisError),
}

/// Key-value store with per-key expiration. The only shared mutable state
/// in the system lives behind this trait; a zero `ttl` means no expiration.
#[async_trait::async_trait]
pub trait CacheStore: Send + Sync {
    async fn ping(&self) -> bool;

    /// Returns `CacheError::NotFound` for an absent key, which callers
    /// treat differently from a failed backend call.
    async fn get(&self, key: &str) -> Result<Vec<u8>, CacheError>;

    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), CacheError>;

    /// Returns the number of keys removed.
    async fn delete(&self, key: &str) -> Result<u64, CacheError>;
}
