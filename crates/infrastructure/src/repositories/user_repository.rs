use async_trait::async_trait;
use scrapbook_application::ports::EntityRepository;
use scrapbook_domain::entity::generate_uid;
use scrapbook_domain::{DomainError, NewUser, User, UserPatch};
use sqlx::SqlitePool;
use tracing::{error, instrument};

use super::map_sqlx_error;
use crate::auth::hash_password;
use crate::database::now_timestamp;

/// (uid, username, email, created_at, updated_at)
type UserRow = (String, String, String, String, String);

// The password column is written but never selected.
const COLUMNS: &str = "uid, username, email, created_at, updated_at";

pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: UserRow) -> User {
        let (uid, username, email, created_at, updated_at) = row;

        User {
            uid,
            username,
            email,
            created_at,
            updated_at,
        }
    }

    async fn hash(password: Option<String>) -> Result<Option<String>, DomainError> {
        let Some(password) = password else {
            return Ok(None);
        };

        tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| DomainError::Persistence(format!("password hashing task failed: {e}")))?
            .map(Some)
    }

    /// Stored password hash for `uid`, if the user set one.
    pub async fn password_hash(&self, uid: &str) -> Result<Option<String>, DomainError> {
        let row: Option<(Option<String>,)> =
            sqlx::query_as("SELECT password FROM users WHERE uid = ?")
                .bind(uid)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(row.and_then(|(hash,)| hash))
    }
}

#[async_trait]
impl EntityRepository<User> for SqliteUserRepository {
    #[instrument(skip(self))]
    async fn create(&self, draft: NewUser) -> Result<User, DomainError> {
        let uid = draft.uid.unwrap_or_else(generate_uid);
        let password = Self::hash(draft.password).await?;
        let now = now_timestamp();

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "INSERT INTO users (uid, username, email, password, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?) RETURNING {COLUMNS}"
        ))
        .bind(&uid)
        .bind(&draft.username)
        .bind(&draft.email)
        .bind(&password)
        .bind(&now)
        .bind(&now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, uid = %uid, "Failed to create user");
            map_sqlx_error(e)
        })?;

        Ok(Self::row_to_user(row))
    }

    #[instrument(skip(self))]
    async fn find_by_uid(&self, uid: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {COLUMNS} FROM users WHERE uid = ?"
        ))
        .bind(uid)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query user by uid");
            map_sqlx_error(e)
        })?;

        Ok(row.map(Self::row_to_user))
    }

    #[instrument(skip(self))]
    async fn update(&self, uid: &str, patch: UserPatch) -> Result<Option<User>, DomainError> {
        let password = Self::hash(patch.password).await?;

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "UPDATE users SET
                username = COALESCE(?, username),
                email = COALESCE(?, email),
                password = COALESCE(?, password),
                updated_at = ?
             WHERE uid = ? RETURNING {COLUMNS}"
        ))
        .bind(patch.username)
        .bind(patch.email)
        .bind(password)
        .bind(now_timestamp())
        .bind(uid)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to update user");
            map_sqlx_error(e)
        })?;

        Ok(row.map(Self::row_to_user))
    }

    /// Owned scraps and tasks go with the user (ON DELETE CASCADE).
    #[instrument(skip(self))]
    async fn delete(&self, uid: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "DELETE FROM users WHERE uid = ? RETURNING {COLUMNS}"
        ))
        .bind(uid)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to delete user");
            map_sqlx_error(e)
        })?;

        Ok(row.map(Self::row_to_user))
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {COLUMNS} FROM users ORDER BY created_at ASC, rowid ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query all users");
            map_sqlx_error(e)
        })?;

        Ok(rows.into_iter().map(Self::row_to_user).collect())
    }
}
