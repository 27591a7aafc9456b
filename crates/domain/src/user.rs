use serde::{Deserialize, Serialize};

use crate::entity::CachedEntity;
use crate::validators::{
    validate_email, validate_optional_text, validate_text, validate_uid, USERNAME_MAX_LEN,
};
use crate::DomainError;

pub const PASSWORD_MIN_LEN: usize = 6;

/// Account owning scraps and tasks.
///
/// The password is write-only: it is accepted through [`NewUser`] and
/// [`UserPatch`], stored hashed, and never read back into this type, so it
/// cannot leak into responses or the cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub uid: String,
    pub username: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
}

impl CachedEntity for User {
    const KIND: &'static str = "user";

    // Deleting a user removes their scraps and tasks through ON DELETE CASCADE.
    const CASCADE_PREFIXES: &'static [&'static str] = &["scrap", "task"];

    type Draft = NewUser;
    type Patch = UserPatch;

    fn uid(&self) -> &str {
        &self.uid
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct NewUser {
    pub uid: Option<String>,
    pub username: String,
    pub email: String,
    pub password: Option<String>,
}

// Hand-written so the password never ends up in logs via `#[instrument]`.
impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("uid", &self.uid)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl NewUser {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            uid: None,
            username: username.into(),
            email: email.into(),
            password: None,
        }
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(uid) = &self.uid {
            validate_uid(uid)?;
        }
        validate_text("username", &self.username, USERNAME_MAX_LEN)?;
        validate_email(&self.email)?;
        if let Some(password) = &self.password {
            validate_password(password)?;
        }
        Ok(())
    }
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl std::fmt::Debug for UserPatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserPatch")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.password.is_none()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.is_empty() {
            return Err(DomainError::InvalidInput(
                "username, email or password must be provided".to_string(),
            ));
        }
        validate_optional_text("username", &self.username, USERNAME_MAX_LEN)?;
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        if let Some(password) = &self.password {
            validate_password(password)?;
        }
        Ok(())
    }
}

fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err(format!(
            "password must have at least {PASSWORD_MIN_LEN} characters"
        ));
    }
    Ok(())
}
