//! End-to-end mission tests through the public router.
//!
//! Run with: cargo test -p waygen-server --test mission_test

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use waygen_server::{api, config::Config, state::AppState};

fn app() -> axum::Router {
    let config = Config::default();
    api::routes(&config).with_state(Arc::new(AppState::new(config)))
}

/// Square survey pattern: four legs turning right, returning near the start.
#[tokio::test]
async fn square_pattern_closes_on_itself() {
    let body = json!({
        "init_lat": 47.3769,
        "init_lon": 8.5417,
        "init_bearing": 45,
        "format": "csv",
        "waypoints": [
            { "horizontal": 100, "bearing": 0, "vertical": 30, "hold_time": 1 },
            { "horizontal": 100, "bearing": 90, "vertical": 30 },
            { "horizontal": 100, "bearing": 180, "vertical": 30 },
            { "horizontal": 100, "bearing": 270, "vertical": 30, "hold_time": 0.5 }
        ]
    });

    let req = Request::builder()
        .method("POST")
        .uri("/v1/waypoints")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let res = app().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let payload: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let wps = payload["waypoints"].as_array().unwrap();
    assert_eq!(wps.len(), 4);

    let bearings: Vec<f64> = wps.iter().map(|wp| wp["true_bearing"].as_f64().unwrap()).collect();
    assert_eq!(bearings, vec![45.0, 135.0, 225.0, 315.0]);

    let last = &wps[3];
    let lat_err = (last["latitude"].as_f64().unwrap() - 47.3769).abs();
    let lon_err = (last["longitude"].as_f64().unwrap() - 8.5417).abs();
    // within a few centimeters of the start
    assert!(lat_err < 1e-6 && lon_err < 1e-6, "lat {lat_err} lon {lon_err}");
}

#[tokio::test]
async fn non_json_body_is_rejected() {
    let req = Request::builder()
        .method("POST")
        .uri("/generate")
        .header("content-type", "application/json")
        .body(Body::from("init_lat=1"))
        .unwrap();
    let res = app().oneshot(req).await.unwrap();
    assert!(res.status().is_client_error());
}
