//! Mapping of core errors onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use waygen_core::WaypointError;

use crate::api::request_id::RequestId;

/// Handler error. Invalid input is the client's fault, export failure is ours.
///
/// When the failing request carried a [`RequestId`] it is echoed in the JSON
/// body so a client report can be matched to the server log.
#[derive(Debug)]
pub struct ApiError {
    pub error: WaypointError,
    pub request_id: Option<RequestId>,
}

impl ApiError {
    pub fn for_request(request_id: &RequestId) -> impl Fn(WaypointError) -> Self + '_ {
        move |error| Self {
            error,
            request_id: Some(request_id.clone()),
        }
    }
}

impl From<WaypointError> for ApiError {
    fn from(error: WaypointError) -> Self {
        Self {
            error,
            request_id: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, mut payload) = match self.error {
            WaypointError::InvalidInput { field, reason } => {
                tracing::debug!(%field, %reason, "rejected request");
                (
                    StatusCode::BAD_REQUEST,
                    json!({ "error": reason, "field": field }),
                )
            }
            WaypointError::ExportFailure(message) => {
                tracing::error!("Export failed: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Failed to export mission" }),
                )
            }
        };
        if let Some(request_id) = self.request_id {
            payload["request_id"] = json!(request_id.as_str());
        }
        (status, Json(payload)).into_response()
    }
}
