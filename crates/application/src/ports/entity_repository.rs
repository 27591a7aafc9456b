use async_trait::async_trait;
use scrapbook_domain::{CachedEntity, DomainError, Scrap, Task, User};

/// Repository interface for one entity kind.
///
/// Implementations own query construction and existence checks. Ordinary
/// not-found conditions are reported as `Ok(None)`; `Err` is reserved for
/// infrastructure failures and is never retried here.
#[async_trait]
pub trait EntityRepository<E: CachedEntity>: Send + Sync {
    /// Inserts a new record.
    ///
    /// # Arguments
    ///
    /// * `draft` - The record to insert. A uid is generated when the draft has none.
    ///
    /// # Returns
    ///
    /// * `Ok(E)` - The stored record with timestamps set by the store
    /// * `Err(DomainError::Persistence)` - Connection failure or constraint violation
    async fn create(&self, draft: E::Draft) -> Result<E, DomainError>;

    /// Retrieves a record by uid.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(E))` - If the record exists
    /// * `Ok(None)` - If no record has this uid
    /// * `Err(DomainError)` - If retrieval fails
    async fn find_by_uid(&self, uid: &str) -> Result<Option<E>, DomainError>;

    /// Applies a partial update.
    ///
    /// Only the fields present in the patch change. The owner of a record is
    /// never part of a patch.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(E))` - The updated record
    /// * `Ok(None)` - If no record has this uid
    /// * `Err(DomainError)` - If the update fails
    async fn update(&self, uid: &str, patch: E::Patch) -> Result<Option<E>, DomainError>;

    /// Removes a record.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(E))` - The removed record
    /// * `Ok(None)` - If nothing matched
    /// * `Err(DomainError)` - If deletion fails
    async fn delete(&self, uid: &str) -> Result<Option<E>, DomainError>;

    /// Returns every record, oldest first. The order is stable while no
    /// writes intervene.
    async fn list_all(&self) -> Result<Vec<E>, DomainError>;
}

pub type ScrapRepository = dyn EntityRepository<Scrap>;
pub type TaskRepository = dyn EntityRepository<Task>;
pub type UserRepository = dyn EntityRepository<User>;
