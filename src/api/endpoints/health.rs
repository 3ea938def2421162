use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::types::ApiContext;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model_enabled: bool,
    pub version: &'static str,
}

/// `GET /health` — liveness check.
pub async fn check(State(ctx): State<ApiContext>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        model_enabled: ctx.model_enabled(),
        version: crate::config::APP_VERSION,
    })
}
