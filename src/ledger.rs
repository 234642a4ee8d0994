use crate::cache::{CacheError, CacheStore};
use crate::domain::transaction::{StatusEntry, TransactionRecord};
use crate::error::OrchestratorError;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Bounded retry for status appends that race the initial write.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(2),
        }
    }
}

/// Cache-backed record of every transaction and its status timeline.
///
/// Records are grouped into one JSON blob per calendar day, keyed
/// `<namespace>_<DD_MM_YYYY>`. The blob is read, mutated in memory and
/// rewritten whole; the store has no compare-and-swap, so two concurrent
/// appends to the same day can race and the loser's write is lost.
#[derive(Clone)]
pub struct TransactionLedger {
    cache: Arc<dyn CacheStore>,
    namespace: String,
    retry: RetryPolicy,
}

type DayBucket = HashMap<String, TransactionRecord>;

impl TransactionLedger {
    pub fn new(cache: Arc<dyn CacheStore>, namespace: impl Into<String>) -> Self {
        Self {
            cache,
            namespace: namespace.into(),
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Today's date in the `DD_MM_YYYY` form used for bucket keys.
    pub fn today_stamp() -> String {
        Utc::now().format("%d_%m_%Y").to_string()
    }

    fn bucket_key(&self, date: &str) -> String {
        format!("{}_{}", self.namespace, date)
    }

    /// `None` means the bucket does not exist yet; any other cache failure
    /// propagates.
    async fn load_bucket(&self, key: &str) -> Result<Option<DayBucket>, OrchestratorError> {
        match self.cache.get(key).await {
            Ok(raw) => Ok(Some(serde_json::from_slice(&raw)?)),
            Err(CacheError::NotFound) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn store_bucket(&self, key: &str, bucket: &DayBucket) -> Result<(), OrchestratorError> {
        let raw = serde_json::to_vec(bucket)?;
        // ttl zero: buckets live until the store evicts them.
        self.cache.set(key, raw, Duration::ZERO).await?;
        Ok(())
    }

    /// Records a freshly submitted payment under today's bucket with a
    /// single `pending` status. A re-used id overwrites the prior record:
    /// create is last-write-wins, not a merge.
    pub async fn create_transaction(
        &self,
        id: &str,
        amount: f64,
        currency: &str,
    ) -> Result<(), OrchestratorError> {
        let record = TransactionRecord::pending(id, amount, currency, Utc::now());
        let key = self.bucket_key(&Self::today_stamp());

        let mut bucket = self.load_bucket(&key).await?.unwrap_or_default();
        bucket.insert(id.to_string(), record);
        self.store_bucket(&key, &bucket).await
    }

    /// Appends a status entry to an existing record in today's bucket.
    ///
    /// A webhook can arrive before the initial record is written, so an
    /// absent id is retried `max_attempts` times with a fixed delay. When
    /// the retries are exhausted the update is dropped and `Ok` is still
    /// returned; the provider gets a success and will not redeliver.
    pub async fn append_status(&self, id: &str, status: &str) -> Result<(), OrchestratorError> {
        let key = self.bucket_key(&Self::today_stamp());

        for attempt in 1..=self.retry.max_attempts {
            let mut bucket = self.load_bucket(&key).await?.unwrap_or_default();
            if let Some(record) = bucket.get_mut(id) {
                record.status_history.push(StatusEntry {
                    status: status.to_string(),
                    timestamp: Utc::now().to_rfc3339(),
                });
                return self.store_bucket(&key, &bucket).await;
            }

            tracing::debug!(
                transaction_id = %id,
                attempt,
                max_attempts = self.retry.max_attempts,
                "transaction not yet visible"
            );
            if attempt < self.retry.max_attempts {
                tokio::time::sleep(self.retry.delay).await;
            }
        }

        tracing::warn!(
            transaction_id = %id,
            status,
            "transaction never became visible, dropping status update"
        );
        Ok(())
    }

    /// All records for a given `DD_MM_YYYY` day, in map order. A missing
    /// bucket means no transactions that day, not a fault.
    pub async fn list_by_date(&self, date: &str) -> Result<Vec<TransactionRecord>, OrchestratorError> {
        let key = self.bucket_key(date);
        Ok(self
            .load_bucket(&key)
            .await?
            .map(|bucket| bucket.into_values().collect())
            .unwrap_or_default())
    }
}
