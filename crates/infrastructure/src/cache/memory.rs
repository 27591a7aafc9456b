use async_trait::async_trait;
use dashmap::DashMap;
use scrapbook_application::ports::{CacheStats, CacheStore};
use scrapbook_domain::DomainError;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Process-local cache store.
///
/// Each key lives in one DashMap shard, so single-key operations are
/// atomic with respect to each other. Entries never expire.
#[derive(Default)]
pub struct InMemoryCacheStore {
    entries: DashMap<String, String>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl InMemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl CacheStore for InMemoryCacheStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let value = self.entries.get(key).map(|entry| entry.value().clone());
        let counter = if value.is_some() { &self.hits } else { &self.misses };
        counter.fetch_add(1, Ordering::Relaxed);
        Ok(value)
    }

    async fn set(&self, key: &str, value: String) -> Result<(), DomainError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<(), DomainError> {
        self.entries.remove(key);
        Ok(())
    }

    async fn del_prefix(&self, prefix: &str) -> Result<u64, DomainError> {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.starts_with(prefix));
        let removed = before.saturating_sub(self.entries.len()) as u64;
        debug!(prefix = %prefix, removed, "Cache prefix purged");
        Ok(removed)
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.len() as u64,
        }
    }
}
