//! CRUD handlers shared by every resource.
//!
//! Each handler validates what it can without touching storage, then hands a
//! [`ServiceRequest`] to the resource's controller and renders the outcome.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::{Json, Response},
};
use scrapbook_application::{
    EntityController, RequestBody, RequestMapping, RequestParams, ServiceRequest,
};
use scrapbook_domain::{Scrap, Task, User};
use tracing::{debug, instrument};

use crate::error::{render, ApiError};
use crate::state::AppState;
use crate::validation::{verify_id, verify_store_body, verify_update_body};

/// An entity exposed under `/{PATH}` and `/{PATH}/{uid}`.
pub trait Resource: RequestMapping {
    const PATH: &'static str;

    fn controller(state: &AppState) -> &EntityController<Self>;
}

impl Resource for Scrap {
    const PATH: &'static str = "scraps";

    fn controller(state: &AppState) -> &EntityController<Self> {
        state.scraps.as_ref()
    }
}

impl Resource for Task {
    const PATH: &'static str = "tasks";

    fn controller(state: &AppState) -> &EntityController<Self> {
        state.tasks.as_ref()
    }
}

impl Resource for User {
    const PATH: &'static str = "users";

    fn controller(state: &AppState) -> &EntityController<Self> {
        state.users.as_ref()
    }
}

#[instrument(skip_all, fields(kind = E::KIND))]
pub async fn index<E: Resource>(State(state): State<AppState>) -> Response {
    let response = E::controller(&state).index(ServiceRequest::default()).await;
    debug!(status = ?response.status, "Listed records");
    render(E::KIND, response)
}

#[instrument(skip_all, fields(kind = E::KIND))]
pub async fn store<E: Resource>(
    State(state): State<AppState>,
    payload: Result<Json<RequestBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = payload?;
    verify_store_body::<E>(&body)?;

    let response = E::controller(&state)
        .store(ServiceRequest::with_body(body))
        .await;
    debug!(status = ?response.status, "Stored record");
    Ok(render(E::KIND, response))
}

#[instrument(skip_all, fields(kind = E::KIND, uid = %uid))]
pub async fn show<E: Resource>(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Response, ApiError> {
    verify_id(&uid)?;

    let response = E::controller(&state)
        .show(ServiceRequest::with_uid(uid))
        .await;
    Ok(render(E::KIND, response))
}

#[instrument(skip_all, fields(kind = E::KIND, uid = %uid))]
pub async fn update<E: Resource>(
    State(state): State<AppState>,
    Path(uid): Path<String>,
    payload: Result<Json<RequestBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    verify_id(&uid)?;
    let Json(body) = payload?;
    verify_update_body::<E>(&body)?;

    let request = ServiceRequest::new(RequestParams::with_uid(uid), body);
    let response = E::controller(&state).update(request).await;
    debug!(status = ?response.status, "Updated record");
    Ok(render(E::KIND, response))
}

#[instrument(skip_all, fields(kind = E::KIND, uid = %uid))]
pub async fn destroy<E: Resource>(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Response, ApiError> {
    verify_id(&uid)?;

    let response = E::controller(&state)
        .delete(ServiceRequest::with_uid(uid))
        .await;
    debug!(status = ?response.status, "Deleted record");
    Ok(render(E::KIND, response))
}
