#![allow(dead_code)]

use scrapbook_application::ports::EntityRepository;
use scrapbook_domain::{NewUser, User};
use scrapbook_infrastructure::{create_pool, SqliteUserRepository};
use sqlx::SqlitePool;
use tempfile::TempDir;

pub const MIGRATIONS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../migrations");

/// File-backed database in a temp dir, migrated like production.
/// Keep the `TempDir` alive for as long as the pool is used.
pub async fn create_test_db() -> (SqlitePool, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("test.db").display());
    let pool = create_pool(&url, 4, MIGRATIONS_DIR).await.unwrap();
    (pool, dir)
}

pub async fn seed_user(pool: &SqlitePool, uid: &str) -> User {
    let repo = SqliteUserRepository::new(pool.clone());
    let mut draft = NewUser::new(format!("user-{uid}"), format!("{uid}@example.com"));
    draft.uid = Some(uid.to_string());
    repo.create(draft).await.unwrap()
}
