//! REST API routes.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::{missions, request_id};
use crate::config::Config;
use crate::state::AppState;

/// Create the API router.
pub fn create_router(config: &Config) -> Router<Arc<AppState>> {
    let router = Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/generate", post(missions::generate))
        .route("/v1/waypoints", post(missions::waypoints))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id::tag_request));

    if config.cors_permissive {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
