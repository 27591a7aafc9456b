use scrapbook_domain::{DomainError, Scrap, Task, User};
use serde::Serialize;
use std::sync::Arc;
use tracing::error;

use super::RequestMapping;
use crate::request::{ServiceRequest, ServiceResponse};
use crate::services::CacheAsideService;

pub type ScrapController = EntityController<Scrap>;
pub type TaskController = EntityController<Task>;
pub type UserController = EntityController<User>;

/// Request-facing side of the cache-aside service.
///
/// Every outcome is folded into a [`ServiceResponse`]: a missing record
/// becomes `not_found`, any store failure becomes `server_error` after
/// being logged. Callers never see a [`DomainError`].
///
/// Requests are expected to have passed validation already. A body that
/// still cannot be converted is logged and answered with `server_error`.
pub struct EntityController<E: RequestMapping> {
    service: Arc<CacheAsideService<E>>,
}

impl<E: RequestMapping> Clone for EntityController<E> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

impl<E: RequestMapping> EntityController<E> {
    pub fn new(service: Arc<CacheAsideService<E>>) -> Self {
        Self { service }
    }

    pub async fn index(&self, _request: ServiceRequest) -> ServiceResponse {
        match self.service.list().await {
            Ok(records) => respond_with(&records),
            Err(e) => server_error("index", E::KIND, e),
        }
    }

    pub async fn store(&self, request: ServiceRequest) -> ServiceResponse {
        let draft = match E::draft(&request.body) {
            Ok(draft) => draft,
            Err(e) => return server_error("store", E::KIND, e),
        };

        match self.service.store(draft).await {
            Ok(record) => respond_with(&record),
            Err(e) => server_error("store", E::KIND, e),
        }
    }

    pub async fn show(&self, request: ServiceRequest) -> ServiceResponse {
        let Some(uid) = request.uid() else {
            return ServiceResponse::not_found();
        };

        match self.service.show(uid).await {
            Ok(Some(record)) => respond_with(&record),
            Ok(None) => ServiceResponse::not_found(),
            Err(e) => server_error("show", E::KIND, e),
        }
    }

    pub async fn update(&self, request: ServiceRequest) -> ServiceResponse {
        let Some(uid) = request.uid() else {
            return ServiceResponse::not_found();
        };
        let patch = match E::patch(&request.body) {
            Ok(patch) => patch,
            Err(e) => return server_error("update", E::KIND, e),
        };

        match self.service.update(uid, patch).await {
            Ok(Some(record)) => respond_with(&record),
            Ok(None) => ServiceResponse::not_found(),
            Err(e) => server_error("update", E::KIND, e),
        }
    }

    /// The removed record is not echoed back; success carries `{}`.
    pub async fn delete(&self, request: ServiceRequest) -> ServiceResponse {
        let Some(uid) = request.uid() else {
            return ServiceResponse::not_found();
        };

        match self.service.delete(uid).await {
            Ok(Some(_)) => ServiceResponse::ok_empty(),
            Ok(None) => ServiceResponse::not_found(),
            Err(e) => server_error("delete", E::KIND, e),
        }
    }
}

fn respond_with<T: Serialize + ?Sized>(value: &T) -> ServiceResponse {
    match serde_json::to_value(value) {
        Ok(body) => ServiceResponse::ok(body),
        Err(e) => {
            error!(error = %e, "Failed to encode response body");
            ServiceResponse::server_error()
        }
    }
}

fn server_error(operation: &str, kind: &str, e: DomainError) -> ServiceResponse {
    match &e {
        DomainError::InvalidInput(_) => {
            error!(operation, kind, error = %e, "Unvalidated request reached the controller")
        }
        _ => error!(operation, kind, error = %e, "Request failed"),
    }
    ServiceResponse::server_error()
}
