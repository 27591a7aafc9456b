use scrapbook_domain::entity::kind_prefix;
use scrapbook_domain::{CachedEntity, DomainError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::ports::{CacheStore, EntityRepository};

/// Coordinates a repository and the cache with the cache-aside protocol.
///
/// Reads are served from the cache when possible and populate it on a miss.
/// Writes go to the repository first; only after the repository succeeds is
/// the single-record key refreshed (or dropped) and the `<kind>:all` key
/// invalidated. A failed repository call leaves the cache untouched.
///
/// Absence is never cached. Between the repository commit and the cache
/// write a concurrent reader may still see the previous cached value; no
/// locking is done to close that window. A populate on a miss re-reads the
/// repository after its put and drops the entry if the record moved, so a
/// racing write can never leave a stale entry behind.
///
/// The service holds no mutable state and can be shared across requests.
pub struct CacheAsideService<E: CachedEntity> {
    repo: Arc<dyn EntityRepository<E>>,
    cache: Arc<dyn CacheStore>,
}

impl<E: CachedEntity> Clone for CacheAsideService<E> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            cache: Arc::clone(&self.cache),
        }
    }
}

impl<E: CachedEntity> CacheAsideService<E> {
    pub fn new(repo: Arc<dyn EntityRepository<E>>, cache: Arc<dyn CacheStore>) -> Self {
        Self { repo, cache }
    }

    /// Creates a record, caches it under its own key and drops the
    /// collection key.
    #[instrument(skip(self), fields(kind = E::KIND))]
    pub async fn store(&self, draft: E::Draft) -> Result<E, DomainError> {
        let record = self.repo.create(draft).await?;

        self.put(&E::cache_key(record.uid()), &record).await?;
        self.cache.del(&E::collection_key()).await?;

        info!(uid = %record.uid(), "Record created");
        Ok(record)
    }

    /// Returns the record for `uid`, from the cache when present.
    ///
    /// A hit is returned as-is without asking the repository whether it is
    /// still current.
    #[instrument(skip(self), fields(kind = E::KIND))]
    pub async fn show(&self, uid: &str) -> Result<Option<E>, DomainError> {
        let key = E::cache_key(uid);

        if let Some(cached) = self.fetch::<E>(&key).await? {
            debug!(key = %key, "Cache hit");
            return Ok(Some(cached));
        }

        debug!(key = %key, "Cache miss");
        let Some(record) = self.repo.find_by_uid(uid).await? else {
            return Ok(None);
        };
        self.put(&key, &record).await?;

        // A write may have committed and invalidated between the read and
        // the put. Any write after this second read invalidates after our put.
        let current = self.repo.find_by_uid(uid).await?;
        if current.as_ref() != Some(&record) {
            warn!(key = %key, "Record changed while populating, dropping entry");
            self.cache.del(&key).await?;
        }
        Ok(current)
    }

    #[instrument(skip(self), fields(kind = E::KIND))]
    pub async fn update(&self, uid: &str, patch: E::Patch) -> Result<Option<E>, DomainError> {
        let Some(record) = self.repo.update(uid, patch).await? else {
            return Ok(None);
        };

        self.put(&E::cache_key(uid), &record).await?;
        self.cache.del(&E::collection_key()).await?;

        info!(uid = %uid, "Record updated");
        Ok(Some(record))
    }

    /// Deletes a record and every cache key that could still describe it.
    ///
    /// For kinds with cascading children the children's keys are purged
    /// too, since the store removed their rows along with this one.
    #[instrument(skip(self), fields(kind = E::KIND))]
    pub async fn delete(&self, uid: &str) -> Result<Option<E>, DomainError> {
        let Some(removed) = self.repo.delete(uid).await? else {
            return Ok(None);
        };

        self.cache.del(&E::cache_key(uid)).await?;
        self.cache.del(&E::collection_key()).await?;

        for child in E::CASCADE_PREFIXES {
            let purged = self.cache.del_prefix(&kind_prefix(child)).await?;
            debug!(child = %child, purged, "Cascaded cache purge");
        }

        info!(uid = %uid, "Record deleted");
        Ok(Some(removed))
    }

    /// Cache-aside read of the whole collection under `<kind>:all`.
    #[instrument(skip(self), fields(kind = E::KIND))]
    pub async fn list(&self) -> Result<Vec<E>, DomainError> {
        let key = E::collection_key();

        if let Some(cached) = self.fetch::<Vec<E>>(&key).await? {
            debug!(key = %key, count = cached.len(), "Cache hit");
            return Ok(cached);
        }

        let records = self.repo.list_all().await?;
        self.put(&key, &records).await?;

        let current = self.repo.list_all().await?;
        if current != records {
            warn!(key = %key, "Collection changed while populating, dropping entry");
            self.cache.del(&key).await?;
            return Ok(current);
        }

        debug!(key = %key, count = records.len(), "Collection cached");
        Ok(records)
    }

    /// Reads and decodes a cached value. An undecodable entry is dropped
    /// and reported as a miss.
    async fn fetch<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, DomainError> {
        let Some(raw) = self.cache.get(key).await? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(key = %key, error = %e, "Discarding undecodable cache entry");
                self.cache.del(key).await?;
                Ok(None)
            }
        }
    }

    async fn put<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), DomainError> {
        let raw = serde_json::to_string(value).map_err(|e| DomainError::Cache(e.to_string()))?;
        self.cache.set(key, raw).await
    }
}
