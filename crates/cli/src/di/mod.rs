use scrapbook_api::AppState;
use scrapbook_application::ports::CacheStore;
use scrapbook_application::{CacheAsideService, EntityController};
use scrapbook_infrastructure::{
    InMemoryCacheStore, SqliteScrapRepository, SqliteTaskRepository, SqliteUserRepository,
};
use sqlx::SqlitePool;
use std::sync::Arc;

/// Wires one controller per entity over the pool. All of them share a
/// single cache store.
pub fn build_app_state(pool: SqlitePool) -> AppState {
    let cache: Arc<dyn CacheStore> = Arc::new(InMemoryCacheStore::new());

    let scraps = CacheAsideService::new(
        Arc::new(SqliteScrapRepository::new(pool.clone())),
        cache.clone(),
    );
    let tasks = CacheAsideService::new(
        Arc::new(SqliteTaskRepository::new(pool.clone())),
        cache.clone(),
    );
    let users = CacheAsideService::new(Arc::new(SqliteUserRepository::new(pool)), cache.clone());

    AppState {
        scraps: Arc::new(EntityController::new(Arc::new(scraps))),
        tasks: Arc::new(EntityController::new(Arc::new(tasks))),
        users: Arc::new(EntityController::new(Arc::new(users))),
        cache,
    }
}
