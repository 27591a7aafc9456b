//! Request checks that run before any controller is reached.

use scrapbook_application::{RequestBody, RequestMapping};
use scrapbook_domain::validators::validate_uid;

use crate::error::ApiError;

pub fn verify_id(uid: &str) -> Result<(), ApiError> {
    validate_uid(uid).map_err(ApiError::BadRequest)
}

/// The body must convert into a valid draft for `E`.
pub fn verify_store_body<E: RequestMapping>(body: &RequestBody) -> Result<(), ApiError> {
    E::draft(body).map(|_| ()).map_err(ApiError::from)
}

/// The body must convert into a valid, non-empty patch for `E`.
pub fn verify_update_body<E: RequestMapping>(body: &RequestBody) -> Result<(), ApiError> {
    E::patch(body).map(|_| ()).map_err(ApiError::from)
}
