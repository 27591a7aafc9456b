#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use scrapbook_api::{create_api_routes, AppState};
use scrapbook_application::{CacheAsideService, EntityController};
use scrapbook_infrastructure::{
    create_pool, InMemoryCacheStore, SqliteScrapRepository, SqliteTaskRepository,
    SqliteUserRepository,
};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

pub const MIGRATIONS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../migrations");

pub struct TestApp {
    pub router: Router,
    pub cache: Arc<InMemoryCacheStore>,
    _dir: TempDir,
}

/// Full router over a temp SQLite file and a fresh in-memory cache.
pub async fn create_test_app() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("api.db").display());
    let pool = create_pool(&url, 4, MIGRATIONS_DIR).await.unwrap();
    let cache = Arc::new(InMemoryCacheStore::new());

    let state = AppState {
        scraps: Arc::new(EntityController::new(Arc::new(CacheAsideService::new(
            Arc::new(SqliteScrapRepository::new(pool.clone())),
            cache.clone(),
        )))),
        tasks: Arc::new(EntityController::new(Arc::new(CacheAsideService::new(
            Arc::new(SqliteTaskRepository::new(pool.clone())),
            cache.clone(),
        )))),
        users: Arc::new(EntityController::new(Arc::new(CacheAsideService::new(
            Arc::new(SqliteUserRepository::new(pool)),
            cache.clone(),
        )))),
        cache: cache.clone(),
    };

    TestApp {
        router: Router::new().nest("/api", create_api_routes(state)),
        cache,
        _dir: dir,
    }
}

impl TestApp {
    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    pub async fn create_user(&self, uid: &str) -> Value {
        let (status, body) = self
            .request(
                "POST",
                "/api/users",
                Some(serde_json::json!({
                    "uid": uid,
                    "username": format!("user-{uid}"),
                    "email": format!("{uid}@example.com"),
                    "password": "secret-password",
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        body
    }
}
