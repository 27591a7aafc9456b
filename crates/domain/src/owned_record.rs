//! Shared definition of user-owned text records.
//!
//! Scraps and tasks have the same fields, limits and inputs. Both are
//! generated from [`owned_record!`] so the two cannot drift apart.

/// Defines a record type with `uid`, `title`, `description`, `userUID`
/// and timestamps, plus its draft and patch inputs.
macro_rules! owned_record {
    (
        $(#[$meta:meta])*
        $name:ident, kind = $kind:literal, draft = $draft:ident, patch = $patch:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            pub uid: String,
            pub title: String,
            pub description: String,
            #[serde(rename = "userUID")]
            pub user_uid: String,
            pub created_at: String,
            pub updated_at: String,
        }

        impl $crate::entity::CachedEntity for $name {
            const KIND: &'static str = $kind;

            type Draft = $draft;
            type Patch = $patch;

            fn uid(&self) -> &str {
                &self.uid
            }
        }

        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $draft {
            /// Assigned by the repository when absent.
            pub uid: Option<String>,
            pub title: String,
            pub description: String,
            pub user_uid: String,
        }

        impl $draft {
            pub fn new(
                title: impl Into<String>,
                description: impl Into<String>,
                user_uid: impl Into<String>,
            ) -> Self {
                Self {
                    uid: None,
                    title: title.into(),
                    description: description.into(),
                    user_uid: user_uid.into(),
                }
            }

            pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
                self.uid = Some(uid.into());
                self
            }

            pub fn validate(&self) -> Result<(), $crate::DomainError> {
                use $crate::validators::{
                    validate_text, validate_uid, DESCRIPTION_MAX_LEN, TITLE_MAX_LEN,
                };

                if let Some(uid) = &self.uid {
                    validate_uid(uid)?;
                }
                validate_text("title", &self.title, TITLE_MAX_LEN)?;
                validate_text("description", &self.description, DESCRIPTION_MAX_LEN)?;
                if self.user_uid.trim().is_empty() {
                    return Err($crate::DomainError::InvalidInput(
                        "userUID cannot be empty".to_string(),
                    ));
                }
                Ok(())
            }
        }

        /// Partial update. The owner is not part of the patch and cannot change.
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $patch {
            pub title: Option<String>,
            pub description: Option<String>,
        }

        impl $patch {
            pub fn is_empty(&self) -> bool {
                self.title.is_none() && self.description.is_none()
            }

            pub fn validate(&self) -> Result<(), $crate::DomainError> {
                use $crate::validators::{
                    validate_optional_text, DESCRIPTION_MAX_LEN, TITLE_MAX_LEN,
                };

                if self.is_empty() {
                    return Err($crate::DomainError::InvalidInput(
                        "title or description must be provided".to_string(),
                    ));
                }
                validate_optional_text("title", &self.title, TITLE_MAX_LEN)?;
                validate_optional_text("description", &self.description, DESCRIPTION_MAX_LEN)?;
                Ok(())
            }
        }
    };
}

pub(crate) use owned_record;
