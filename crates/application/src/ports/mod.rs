mod cache_store;
mod entity_repository;

pub use cache_store::{CacheStats, CacheStore};
pub use entity_repository::{EntityRepository, ScrapRepository, TaskRepository, UserRepository};
