use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the API router.
///
/// CORS is permissive: the browser front end is served from another origin.
pub fn api_router(ctx: ApiContext) -> Router {
    Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/predict", post(endpoints::predict::predict))
        .route("/analyze", post(endpoints::analyze::analyze))
        .with_state(ctx)
        .layer(CorsLayer::permissive())
}
