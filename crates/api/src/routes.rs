use crate::handlers::{self, entities, Resource};
use crate::state::AppState;
use axum::{routing::get, Router};
use scrapbook_domain::{Scrap, Task, User};

/// Creates all API routes with state. Callers mount the result under `/api`.
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/cache/stats", get(handlers::get_cache_stats))
        .merge(resource_routes::<Scrap>())
        .merge(resource_routes::<Task>())
        .merge(resource_routes::<User>())
        .with_state(state)
}

fn resource_routes<E: Resource>() -> Router<AppState> {
    Router::new()
        .route(
            &format!("/{}", E::PATH),
            get(entities::index::<E>).post(entities::store::<E>),
        )
        .route(
            &format!("/{}/{{uid}}", E::PATH),
            get(entities::show::<E>)
                .put(entities::update::<E>)
                .delete(entities::destroy::<E>),
        )
}
