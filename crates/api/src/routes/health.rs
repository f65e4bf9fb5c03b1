//! Liveness probe mounted at the root, outside `/api/v1`.
//!
//! Only the database is probed. The breed catalogue is reported by URL and
//! never called here; a slow catalogue must not fail the health check.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the database answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Breed catalogue consulted on cat writes.
    pub breed_api: String,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = spycat_db::health_check(&state.pool).await.is_ok();
    if !db_healthy {
        tracing::warn!("Health check: database unreachable");
    }

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        breed_api: state.config.breed_api_url.clone(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
