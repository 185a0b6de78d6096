//! Liveness and health endpoints.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::app::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct StoreHealth {
    pub kind: &'static str,
    pub products: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub store: StoreHealth,
    pub checked_at: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/alive", get(alive))
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        store: StoreHealth {
            kind: "in-memory",
            products: state.store.get_all().await.len(),
        },
        checked_at: chrono::Utc::now().to_rfc3339(),
    })
}

pub async fn alive() -> &'static str {
    "Healthy"
}
