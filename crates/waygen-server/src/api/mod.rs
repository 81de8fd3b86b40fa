//! API routes for the waypoint server.

pub mod error;
pub mod missions;
pub mod request_id;
mod routes;

use crate::config::Config;
use axum::Router;

pub fn routes(config: &Config) -> Router<std::sync::Arc<crate::state::AppState>> {
    routes::create_router(config)
}
