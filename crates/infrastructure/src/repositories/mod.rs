pub mod owned_record_repository;
pub mod user_repository;

pub use owned_record_repository::{
    OwnedRecord, SqliteOwnedRecordRepository, SqliteScrapRepository, SqliteTaskRepository,
};
pub use user_repository::SqliteUserRepository;

use scrapbook_domain::DomainError;

/// Every sqlx failure, constraint violations included, is a persistence error.
pub(crate) fn map_sqlx_error(e: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_foreign_key_violation() {
            return DomainError::Persistence(format!("owner does not exist: {}", db.message()));
        }
        if db.is_unique_violation() {
            return DomainError::Persistence(format!("uid already taken: {}", db.message()));
        }
    }
    DomainError::Persistence(e.to_string())
}
