use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use scrapbook_application::{ResponseStatus, ServiceResponse};
use scrapbook_domain::DomainError;
use serde_json::Value;

use crate::dto::MessageResponse;

/// Failures answered with a `{"success":false,"message":...}` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::BadRequest(msg) => msg.clone(),
            ApiError::NotFound(kind) => format!("{kind} not found"),
            ApiError::Internal => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(MessageResponse::failure(self.message()))).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidInput(msg) => ApiError::BadRequest(msg),
            DomainError::Persistence(_) | DomainError::Cache(_) => ApiError::Internal,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Turns a controller outcome into the HTTP answer. `kind` names the
/// entity in the 404 message.
pub fn render(kind: &str, response: ServiceResponse) -> Response {
    match response.status {
        ResponseStatus::Ok => {
            let body = response.body.unwrap_or(Value::Object(serde_json::Map::new()));
            (StatusCode::OK, Json(body)).into_response()
        }
        ResponseStatus::NotFound => ApiError::NotFound(kind.to_string()).into_response(),
        ResponseStatus::ServerError => ApiError::Internal.into_response(),
    }
}
