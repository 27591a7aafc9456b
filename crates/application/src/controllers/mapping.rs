use scrapbook_domain::{
    CachedEntity, DomainError, NewScrap, NewTask, NewUser, Scrap, ScrapPatch, Task, TaskPatch,
    User, UserPatch,
};

use crate::request::RequestBody;

/// Builds an entity's typed inputs out of a request body.
///
/// Both conversions validate what they build, so a successful conversion
/// is safe to hand to the repository.
pub trait RequestMapping: CachedEntity {
    fn draft(body: &RequestBody) -> Result<Self::Draft, DomainError>;

    fn patch(body: &RequestBody) -> Result<Self::Patch, DomainError>;
}

fn required(field: &str, value: &Option<String>) -> Result<String, DomainError> {
    value
        .clone()
        .ok_or_else(|| DomainError::InvalidInput(format!("{field} is required")))
}

impl RequestMapping for Scrap {
    fn draft(body: &RequestBody) -> Result<NewScrap, DomainError> {
        let draft = NewScrap {
            uid: body.uid.clone(),
            title: required("title", &body.title)?,
            description: required("description", &body.description)?,
            user_uid: required("userUID", &body.user_uid)?,
        };
        draft.validate()?;
        Ok(draft)
    }

    // A userUID in the body is ignored: ownership is fixed at creation.
    fn patch(body: &RequestBody) -> Result<ScrapPatch, DomainError> {
        let patch = ScrapPatch {
            title: body.title.clone(),
            description: body.description.clone(),
        };
        patch.validate()?;
        Ok(patch)
    }
}

impl RequestMapping for Task {
    fn draft(body: &RequestBody) -> Result<NewTask, DomainError> {
        let draft = NewTask {
            uid: body.uid.clone(),
            title: required("title", &body.title)?,
            description: required("description", &body.description)?,
            user_uid: required("userUID", &body.user_uid)?,
        };
        draft.validate()?;
        Ok(draft)
    }

    fn patch(body: &RequestBody) -> Result<TaskPatch, DomainError> {
        let patch = TaskPatch {
            title: body.title.clone(),
            description: body.description.clone(),
        };
        patch.validate()?;
        Ok(patch)
    }
}

impl RequestMapping for User {
    fn draft(body: &RequestBody) -> Result<NewUser, DomainError> {
        let draft = NewUser {
            uid: body.uid.clone(),
            username: required("username", &body.username)?,
            email: required("email", &body.email)?,
            password: body.password.clone(),
        };
        draft.validate()?;
        Ok(draft)
    }

    fn patch(body: &RequestBody) -> Result<UserPatch, DomainError> {
        let patch = UserPatch {
            username: body.username.clone(),
            email: body.email.clone(),
            password: body.password.clone(),
        };
        patch.validate()?;
        Ok(patch)
    }
}
