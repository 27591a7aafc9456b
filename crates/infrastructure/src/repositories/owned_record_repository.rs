use async_trait::async_trait;
use scrapbook_application::ports::EntityRepository;
use scrapbook_domain::entity::generate_uid;
use scrapbook_domain::{
    CachedEntity, DomainError, NewScrap, NewTask, Scrap, ScrapPatch, Task, TaskPatch,
};
use sqlx::SqlitePool;
use std::marker::PhantomData;
use tracing::{error, instrument};

use super::map_sqlx_error;
use crate::database::now_timestamp;

/// (uid, title, description, user_uid, created_at, updated_at)
type RecordRow = (String, String, String, String, String, String);

/// Fields shared by user-owned text records (scraps and tasks).
pub trait OwnedRecord: CachedEntity {
    const TABLE: &'static str;

    fn from_row(row: RecordRow) -> Self;

    /// (uid, title, description, user_uid)
    fn draft_parts(draft: Self::Draft) -> (Option<String>, String, String, String);

    /// (title, description)
    fn patch_parts(patch: Self::Patch) -> (Option<String>, Option<String>);
}

impl OwnedRecord for Scrap {
    const TABLE: &'static str = "scraps";

    fn from_row(row: RecordRow) -> Self {
        let (uid, title, description, user_uid, created_at, updated_at) = row;
        Scrap {
            uid,
            title,
            description,
            user_uid,
            created_at,
            updated_at,
        }
    }

    fn draft_parts(draft: NewScrap) -> (Option<String>, String, String, String) {
        (draft.uid, draft.title, draft.description, draft.user_uid)
    }

    fn patch_parts(patch: ScrapPatch) -> (Option<String>, Option<String>) {
        (patch.title, patch.description)
    }
}

impl OwnedRecord for Task {
    const TABLE: &'static str = "tasks";

    fn from_row(row: RecordRow) -> Self {
        let (uid, title, description, user_uid, created_at, updated_at) = row;
        Task {
            uid,
            title,
            description,
            user_uid,
            created_at,
            updated_at,
        }
    }

    fn draft_parts(draft: NewTask) -> (Option<String>, String, String, String) {
        (draft.uid, draft.title, draft.description, draft.user_uid)
    }

    fn patch_parts(patch: TaskPatch) -> (Option<String>, Option<String>) {
        (patch.title, patch.description)
    }
}

const COLUMNS: &str = "uid, title, description, user_uid, created_at, updated_at";

pub type SqliteScrapRepository = SqliteOwnedRecordRepository<Scrap>;
pub type SqliteTaskRepository = SqliteOwnedRecordRepository<Task>;

pub struct SqliteOwnedRecordRepository<E: OwnedRecord> {
    pool: SqlitePool,
    _entity: PhantomData<fn() -> E>,
}

impl<E: OwnedRecord> SqliteOwnedRecordRepository<E> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E: OwnedRecord> EntityRepository<E> for SqliteOwnedRecordRepository<E> {
    #[instrument(skip(self), fields(table = E::TABLE))]
    async fn create(&self, draft: E::Draft) -> Result<E, DomainError> {
        let (uid, title, description, user_uid) = E::draft_parts(draft);
        let uid = uid.unwrap_or_else(generate_uid);
        let now = now_timestamp();

        let sql = format!(
            "INSERT INTO {} ({COLUMNS}) VALUES (?, ?, ?, ?, ?, ?) RETURNING {COLUMNS}",
            E::TABLE
        );
        let row = sqlx::query_as::<_, RecordRow>(&sql)
            .bind(&uid)
            .bind(&title)
            .bind(&description)
            .bind(&user_uid)
            .bind(&now)
            .bind(&now)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, uid = %uid, user_uid = %user_uid, "Failed to insert record");
                map_sqlx_error(e)
            })?;

        Ok(E::from_row(row))
    }

    #[instrument(skip(self), fields(table = E::TABLE))]
    async fn find_by_uid(&self, uid: &str) -> Result<Option<E>, DomainError> {
        let sql = format!("SELECT {COLUMNS} FROM {} WHERE uid = ?", E::TABLE);
        let row = sqlx::query_as::<_, RecordRow>(&sql)
            .bind(uid)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to query record by uid");
                map_sqlx_error(e)
            })?;

        Ok(row.map(E::from_row))
    }

    #[instrument(skip(self), fields(table = E::TABLE))]
    async fn update(&self, uid: &str, patch: E::Patch) -> Result<Option<E>, DomainError> {
        let (title, description) = E::patch_parts(patch);

        let sql = format!(
            "UPDATE {} SET title = COALESCE(?, title), description = COALESCE(?, description),
             updated_at = ? WHERE uid = ? RETURNING {COLUMNS}",
            E::TABLE
        );
        let row = sqlx::query_as::<_, RecordRow>(&sql)
            .bind(title)
            .bind(description)
            .bind(now_timestamp())
            .bind(uid)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to update record");
                map_sqlx_error(e)
            })?;

        Ok(row.map(E::from_row))
    }

    #[instrument(skip(self), fields(table = E::TABLE))]
    async fn delete(&self, uid: &str) -> Result<Option<E>, DomainError> {
        let sql = format!("DELETE FROM {} WHERE uid = ? RETURNING {COLUMNS}", E::TABLE);
        let row = sqlx::query_as::<_, RecordRow>(&sql)
            .bind(uid)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete record");
                map_sqlx_error(e)
            })?;

        Ok(row.map(E::from_row))
    }

    #[instrument(skip(self), fields(table = E::TABLE))]
    async fn list_all(&self) -> Result<Vec<E>, DomainError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM {} ORDER BY created_at ASC, rowid ASC",
            E::TABLE
        );
        let rows = sqlx::query_as::<_, RecordRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to query all records");
                map_sqlx_error(e)
            })?;

        Ok(rows.into_iter().map(E::from_row).collect())
    }
}
