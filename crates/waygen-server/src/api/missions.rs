//! Mission generation endpoints.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::api::request_id::RequestId;
use crate::request::MissionRequest;
use crate::state::AppState;
use waygen_core::{export, generate_waypoints, path_length_m, Waypoint, WaypointError};

/// Parse the body and accumulate its legs into absolute waypoints.
fn plan(state: &AppState, body: &Value) -> Result<(MissionRequest, Vec<Waypoint>), WaypointError> {
    let req = MissionRequest::from_json(body, state.config().max_legs)?;
    let waypoints = generate_waypoints(
        req.origin.lat,
        req.origin.lon,
        req.initial_bearing,
        &req.legs,
    )?;
    Ok((req, waypoints))
}

/// Generate the mission and return it as a downloadable CSV or KML file.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Json(body): Json<Value>,
) -> Result<Response, ApiError> {
    let to_api = ApiError::for_request(&request_id);
    let (req, waypoints) = plan(&state, &body).map_err(&to_api)?;

    let span = tracing::info_span!(
        "export",
        %request_id,
        format = ?req.format,
        waypoints = waypoints.len(),
    );
    let bytes = span
        .in_scope(|| export(req.format, req.origin, &waypoints, &req.mission))
        .map_err(&to_api)?;
    span.in_scope(|| tracing::info!(bytes = bytes.len(), "Generated mission"));

    let headers = [
        (header::CONTENT_TYPE, req.format.mime_type().to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", req.format.download_name()),
        ),
    ];
    Ok((headers, bytes).into_response())
}

#[derive(Debug, Serialize)]
pub struct WaypointsResponse {
    pub waypoints: Vec<Waypoint>,
    pub count: usize,
    pub path_length_m: f64,
}

/// Generate the mission and return the absolute waypoints as JSON.
pub async fn waypoints(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Json(body): Json<Value>,
) -> Result<Json<WaypointsResponse>, ApiError> {
    let (req, waypoints) = plan(&state, &body).map_err(ApiError::for_request(&request_id))?;
    let length = path_length_m(req.origin, &waypoints);

    Ok(Json(WaypointsResponse {
        count: waypoints.len(),
        path_length_m: length,
        waypoints,
    }))
}
