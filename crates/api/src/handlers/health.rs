use axum::Json;
use tracing::debug;

use crate::dto::HealthResponse;

pub async fn health_check() -> Json<HealthResponse> {
    debug!("Health check requested");
    Json(HealthResponse { status: "ok" })
}
