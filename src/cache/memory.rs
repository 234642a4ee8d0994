use crate::cache::{CacheError, CacheStore};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use std::time::Duration;

/// In-process stand-in for Redis. Expiration is not modelled; the ledger
/// writes its buckets with no ttl anyway.
#[derive(Default)]
pub struct InMemoryCacheStore {
    entries: RwLock<HashMap<String, Vec<u8>>>,
    gets: AtomicU64,
}

impl InMemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `get` calls observed, including misses.
    pub fn get_count(&self) -> u64 {
        self.gets.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl CacheStore for InMemoryCacheStore {
    async fn ping(&self) -> bool {
        true
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>, CacheError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.entries
            .read()
            .expect("cache lock poisoned")
            .get(key)
            .cloned()
            .ok_or(CacheError::NotFound)
    }

    async fn set(&self, key: &str, value: Vec<u8>, _ttl: Duration) -> Result<(), CacheError> {
        self.entries
            .write()
            .expect("cache lock poisoned")
            .insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<u64, CacheError> {
        let removed = self
            .entries
            .write()
            .expect("cache lock poisoned")
            .remove(key);
        Ok(u64::from(removed.is_some()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn absent_key_is_a_miss_not_an_error() {
        let store = InMemoryCacheStore::new();
        assert!(matches!(store.get("nope").await, Err(CacheError::NotFound)));
        assert_eq!(store.get_count(), 1);
    }

    #[tokio::test]
    async fn delete_reports_how_many_keys_went_away() {
        let store = InMemoryCacheStore::new();
        store.set("k", b"v".to_vec(), Duration::ZERO).await.unwrap();
        assert_eq!(store.delete("k").await.unwrap(), 1);
        assert_eq!(store.delete("k").await.unwrap(), 0);
    }
}
