//! Scrapbook Infrastructure Layer
//!
//! SQLite-backed repositories, the in-memory cache store and the pool setup.
pub mod auth;
pub mod cache;
pub mod database;
pub mod repositories;

pub use cache::InMemoryCacheStore;
pub use database::create_pool;
pub use repositories::{SqliteScrapRepository, SqliteTaskRepository, SqliteUserRepository};
