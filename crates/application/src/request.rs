//! Transport-neutral request and response descriptors.
//!
//! The HTTP layer fills a [`ServiceRequest`] from path parameters and the
//! JSON body, and turns a [`ServiceResponse`] back into a status code and
//! payload. Nothing in here knows about HTTP.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default)]
pub struct ServiceRequest {
    pub params: RequestParams,
    pub body: RequestBody,
}

impl ServiceRequest {
    pub fn new(params: RequestParams, body: RequestBody) -> Self {
        Self { params, body }
    }

    pub fn with_uid(uid: impl Into<String>) -> Self {
        Self {
            params: RequestParams::with_uid(uid),
            body: RequestBody::default(),
        }
    }

    pub fn with_body(body: RequestBody) -> Self {
        Self {
            params: RequestParams::default(),
            body,
        }
    }

    pub fn uid(&self) -> Option<&str> {
        self.params.uid.as_deref()
    }
}

/// Path parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RequestParams {
    pub uid: Option<String>,
}

impl RequestParams {
    pub fn with_uid(uid: impl Into<String>) -> Self {
        Self {
            uid: Some(uid.into()),
        }
    }
}

/// Every field any entity accepts. Which ones are required depends on the
/// entity and the operation.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestBody {
    pub uid: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "userUID", alias = "userUid", alias = "user_uid")]
    pub user_uid: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl std::fmt::Debug for RequestBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestBody")
            .field("uid", &self.uid)
            .field("title", &self.title)
            .field("description", &self.description)
            .field("user_uid", &self.user_uid)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ResponseStatus {
    Ok,
    NotFound,
    ServerError,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceResponse {
    pub status: ResponseStatus,
    pub body: Option<Value>,
}

impl ServiceResponse {
    pub fn ok(body: Value) -> Self {
        Self {
            status: ResponseStatus::Ok,
            body: Some(body),
        }
    }

    /// `ok` with an empty JSON object, used when nothing is echoed back.
    pub fn ok_empty() -> Self {
        Self::ok(Value::Object(serde_json::Map::new()))
    }

    pub fn not_found() -> Self {
        Self {
            status: ResponseStatus::NotFound,
            body: None,
        }
    }

    pub fn server_error() -> Self {
        Self {
            status: ResponseStatus::ServerError,
            body: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == ResponseStatus::Ok
    }
}
