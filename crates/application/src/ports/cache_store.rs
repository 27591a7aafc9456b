use async_trait::async_trait;
use scrapbook_domain::DomainError;
use serde::Serialize;

/// String-keyed cache holding serialized entities and collections.
///
/// Single-key operations must be atomic. There is no expiry: entries live
/// until overwritten or deleted.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Unconditional overwrite.
    async fn set(&self, key: &str, value: String) -> Result<(), DomainError>;

    /// Removing an absent key is not an error.
    async fn del(&self, key: &str) -> Result<(), DomainError>;

    /// Removes every key starting with `prefix` and returns how many went.
    async fn del_prefix(&self, prefix: &str) -> Result<u64, DomainError>;

    fn stats(&self) -> CacheStats;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
